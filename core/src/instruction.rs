use std::fmt;

/// # Instructions
///
/// Chip-8 instructions are 16 bits each. Their behavior is cased on some combination of:
/// - `(n, _, _, _)` broad categorization; applies to all instructions
/// - `(_, _, _, n)` specific behavior within a category
/// - `(_, _, n, n)` more specific behavior within a category
///
/// Nibbles not used to determine the operation often (but not always) carry operands.
/// - `(_, n, n, n)` a 12-bit address
/// - `(_, _, n, n)` a byte that is assigned to and/or compared with Vx
/// - `(_, n, _, _)` either the register Vx or the range of registers V0..=Vx
/// - `(_, _, n, _)` the register Vy
/// - `(_, _, _, n)` the height of a sprite
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// clear the display
    Cls,
    /// PC = STACK.pop()
    Ret,
    /// PC = addr
    Jp(u16),
    /// STACK.push(PC + 2); PC = addr
    Call(u16),
    /// if Vx == kk then skip
    SeByte(u8, u8),
    /// if Vx != kk then skip
    SneByte(u8, u8),
    /// if Vx == Vy then skip
    SeReg(u8, u8),
    /// Vx = kk
    LdByte(u8, u8),
    /// Vx += kk; VF untouched
    AddByte(u8, u8),
    /// Vx = Vy
    LdReg(u8, u8),
    /// Vx |= Vy
    Or(u8, u8),
    /// Vx &= Vy
    And(u8, u8),
    /// Vx ^= Vy
    Xor(u8, u8),
    /// Vx += Vy; VF = carry
    AddReg(u8, u8),
    /// Vx -= Vy; VF = !borrow
    Sub(u8, u8),
    /// Vx >>= 1; VF = shifted out bit
    Shr(u8),
    /// Vx = Vy - Vx; VF = !borrow
    Subn(u8, u8),
    /// Vx <<= 1; VF = shifted out bit
    Shl(u8),
    /// if Vx != Vy then skip
    SneReg(u8, u8),
    /// I = addr
    LdI(u16),
    /// PC = V0 + addr
    JpV0(u16),
    /// Vx = random & kk
    Rnd(u8, u8),
    /// draw n rows of sprite data from I at (Vx, Vy); VF = collision
    Drw(u8, u8, u8),
    /// if key Vx is held then skip
    Skp(u8),
    /// if key Vx isn't held then skip
    Sknp(u8),
    /// Vx = DT
    LdVxDt(u8),
    /// wait for a key release and store it in Vx
    LdVxK(u8),
    /// DT = Vx
    LdDtVx(u8),
    /// ST = Vx
    LdStVx(u8),
    /// I += Vx; VF = I > 0xFFF
    AddI(u8),
    /// I = address of the glyph for Vx
    LdF(u8),
    /// mem[I..I+3] = bcd(Vx)
    LdB(u8),
    /// mem[I..=I+x] = V0..=Vx
    LdIVx(u8),
    /// V0..=Vx = mem[I..=I+x]
    LdVxI(u8),
    /// a word matching no known instruction; executes as a no-op
    Unknown(u16),
}

impl Instruction {
    /// Selects the Instruction encoded by a raw word.
    ///
    /// Every word decodes to something; words that don't match any known pattern
    /// (including `0nnn` machine code calls) decode to `Unknown`.
    pub fn decode(word: u16) -> Self {
        use Instruction::*;

        let x = nibble(word, 2);
        let y = nibble(word, 1);
        let n = nibble(word, 0);
        let kk = (word & 0x00FF) as u8;
        let addr = word & 0x0FFF;

        match (nibble(word, 3), x, y, n) {
            (0x0, _, 0xE, 0x0) => Cls,
            (0x0, _, 0xE, 0xE) => Ret,
            (0x1, ..) => Jp(addr),
            (0x2, ..) => Call(addr),
            (0x3, ..) => SeByte(x, kk),
            (0x4, ..) => SneByte(x, kk),
            (0x5, .., 0x0) => SeReg(x, y),
            (0x6, ..) => LdByte(x, kk),
            (0x7, ..) => AddByte(x, kk),
            (0x8, .., 0x0) => LdReg(x, y),
            (0x8, .., 0x1) => Or(x, y),
            (0x8, .., 0x2) => And(x, y),
            (0x8, .., 0x3) => Xor(x, y),
            (0x8, .., 0x4) => AddReg(x, y),
            (0x8, .., 0x5) => Sub(x, y),
            (0x8, .., 0x6) => Shr(x),
            (0x8, .., 0x7) => Subn(x, y),
            (0x8, .., 0xE) => Shl(x),
            (0x9, .., 0x0) => SneReg(x, y),
            (0xA, ..) => LdI(addr),
            (0xB, ..) => JpV0(addr),
            (0xC, ..) => Rnd(x, kk),
            (0xD, ..) => Drw(x, y, n),
            (0xE, _, 0x9, 0xE) => Skp(x),
            (0xE, _, 0xA, 0x1) => Sknp(x),
            (0xF, _, 0x0, 0x7) => LdVxDt(x),
            (0xF, _, 0x0, 0xA) => LdVxK(x),
            (0xF, _, 0x1, 0x5) => LdDtVx(x),
            (0xF, _, 0x1, 0x8) => LdStVx(x),
            (0xF, _, 0x1, 0xE) => AddI(x),
            (0xF, _, 0x2, 0x9) => LdF(x),
            (0xF, _, 0x3, 0x3) => LdB(x),
            (0xF, _, 0x5, 0x5) => LdIVx(x),
            (0xF, _, 0x6, 0x5) => LdVxI(x),
            _ => Unknown(word),
        }
    }
}

/// The `index`th nibble of `word`, counting from the least significant
fn nibble(word: u16, index: u16) -> u8 {
    ((word >> (index * 4)) & 0xF) as u8
}

/// Disassembles to the conventional mnemonic form
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Instruction::*;

        match *self {
            Cls => write!(f, "CLS"),
            Ret => write!(f, "RET"),
            Jp(addr) => write!(f, "JP {:#05X}", addr),
            Call(addr) => write!(f, "CALL {:#05X}", addr),
            SeByte(x, kk) => write!(f, "SE V{:X}, {:#04X}", x, kk),
            SneByte(x, kk) => write!(f, "SNE V{:X}, {:#04X}", x, kk),
            SeReg(x, y) => write!(f, "SE V{:X}, V{:X}", x, y),
            LdByte(x, kk) => write!(f, "LD V{:X}, {:#04X}", x, kk),
            AddByte(x, kk) => write!(f, "ADD V{:X}, {:#04X}", x, kk),
            LdReg(x, y) => write!(f, "LD V{:X}, V{:X}", x, y),
            Or(x, y) => write!(f, "OR V{:X}, V{:X}", x, y),
            And(x, y) => write!(f, "AND V{:X}, V{:X}", x, y),
            Xor(x, y) => write!(f, "XOR V{:X}, V{:X}", x, y),
            AddReg(x, y) => write!(f, "ADD V{:X}, V{:X}", x, y),
            Sub(x, y) => write!(f, "SUB V{:X}, V{:X}", x, y),
            Shr(x) => write!(f, "SHR V{:X}", x),
            Subn(x, y) => write!(f, "SUBN V{:X}, V{:X}", x, y),
            Shl(x) => write!(f, "SHL V{:X}", x),
            SneReg(x, y) => write!(f, "SNE V{:X}, V{:X}", x, y),
            LdI(addr) => write!(f, "LD I, {:#05X}", addr),
            JpV0(addr) => write!(f, "JP V0, {:#05X}", addr),
            Rnd(x, kk) => write!(f, "RND V{:X}, {:#04X}", x, kk),
            Drw(x, y, n) => write!(f, "DRW V{:X}, V{:X}, {}", x, y, n),
            Skp(x) => write!(f, "SKP V{:X}", x),
            Sknp(x) => write!(f, "SKNP V{:X}", x),
            LdVxDt(x) => write!(f, "LD V{:X}, DT", x),
            LdVxK(x) => write!(f, "LD V{:X}, K", x),
            LdDtVx(x) => write!(f, "LD DT, V{:X}", x),
            LdStVx(x) => write!(f, "LD ST, V{:X}", x),
            AddI(x) => write!(f, "ADD I, V{:X}", x),
            LdF(x) => write!(f, "LD F, V{:X}", x),
            LdB(x) => write!(f, "LD B, V{:X}", x),
            LdIVx(x) => write!(f, "LD [I], V{:X}", x),
            LdVxI(x) => write!(f, "LD V{:X}, [I]", x),
            Unknown(word) => write!(f, "??? {:#06X}", word),
        }
    }
}
