use log::{debug, warn};
use rand::Rng;

use crate::constants::{ADDRESS_MASK, GLYPH_SIZE, MAX_SPRITE_HEIGHT, REGISTER_COUNT};
use crate::instruction::Instruction;
use crate::state::State;

/// Executes a single decoded Instruction against the state.
///
/// Every operation sets the next PC itself; +2 to move on, +4 to skip.
pub fn execute(instruction: Instruction, state: &mut State, rng: &mut impl Rng) {
    use Instruction::*;

    let v = state.registers.v;
    let reg = |r: u8| vx(&v, r);

    match instruction {
        Cls => cls(state),
        Ret => ret(state),
        Jp(addr) => jp(state, addr),
        Call(addr) => call(state, addr),
        SeByte(x, kk) => skip_if(state, reg(x) == kk),
        SneByte(x, kk) => skip_if(state, reg(x) != kk),
        SeReg(x, y) => skip_if(state, reg(x) == reg(y)),
        LdByte(x, kk) => ld(state, x, kk),
        AddByte(x, kk) => ld(state, x, reg(x).wrapping_add(kk)),
        LdReg(x, y) => ld(state, x, reg(y)),
        Or(x, y) => ld(state, x, reg(x) | reg(y)),
        And(x, y) => ld(state, x, reg(x) & reg(y)),
        Xor(x, y) => ld(state, x, reg(x) ^ reg(y)),
        AddReg(x, y) => add(state, x, y),
        Sub(x, y) => sub(state, x, y),
        Shr(x) => shr(state, x),
        Subn(x, y) => subn(state, x, y),
        Shl(x) => shl(state, x),
        SneReg(x, y) => skip_if(state, reg(x) != reg(y)),
        LdI(addr) => ldi(state, addr),
        JpV0(addr) => jp(state, u16::from(reg(0x0)) + addr),
        Rnd(x, kk) => ld(state, x, rng.gen::<u8>() & kk),
        Drw(x, y, n) => drw(state, x, y, n),
        Skp(x) => {
            let held = state.keypad.is_held(reg(x));
            skip_if(state, held)
        }
        Sknp(x) => {
            let held = state.keypad.is_held(reg(x));
            skip_if(state, !held)
        }
        LdVxDt(x) => {
            let delay = state.timers.delay;
            ld(state, x, delay)
        }
        LdVxK(x) => await_key(state, x),
        LdDtVx(x) => {
            state.timers.delay = reg(x);
            next(state);
        }
        LdStVx(x) => {
            state.timers.sound = reg(x);
            next(state);
        }
        AddI(x) => addi(state, x),
        LdF(x) => ldi(state, u16::from(reg(x) & 0xF) * GLYPH_SIZE),
        LdB(x) => bcd(state, x),
        LdIVx(x) => stor(state, x),
        LdVxI(x) => read(state, x),
        Unknown(word) => {
            warn!(
                "ignoring unknown instruction {:04X} at {:03X}",
                word, state.registers.pc
            );
            next(state);
        }
    }
}

/// Finishes a pending `LD Vx, K` if a key has been released since the last refresh.
///
/// Returns whether the wait is over; the PC only moves past the waiting
/// instruction once it is.
pub fn resume_key_wait(state: &mut State) -> bool {
    let Some(x) = state.awaiting_key else {
        return true;
    };
    match state.keypad.take_released() {
        Some(key) => {
            debug!("key {:X} released into V{:X}", key, x);
            state.registers.v[usize::from(x)] = key;
            state.awaiting_key = None;
            next(state);
            true
        }
        None => false,
    }
}

/// Vx
fn vx(v: &[u8; REGISTER_COUNT], x: u8) -> u8 {
    debug_assert!(x < 0x10, "register index {} out of range", x);
    v[usize::from(x & 0xF)]
}

/// pc += 2
fn next(state: &mut State) {
    state.registers.pc = state.registers.pc.wrapping_add(0x2);
}

/// if condition then pc += 4 else pc += 2
fn skip_if(state: &mut State, condition: bool) {
    let step = if condition { 0x4 } else { 0x2 };
    state.registers.pc = state.registers.pc.wrapping_add(step);
}

/// Vx = value
fn ld(state: &mut State, x: u8, value: u8) {
    state.registers.v[usize::from(x & 0xF)] = value;
    next(state);
}

/// Writes the flag before the result so VF holds the result when x is F
fn ld_with_flag(state: &mut State, x: u8, value: u8, flag: bool) {
    state.registers.set_flag(flag);
    state.registers.v[usize::from(x & 0xF)] = value;
    next(state);
}

/// clear
fn cls(state: &mut State) {
    state.frame_buffer.clear();
    next(state);
}

/// PC = STACK.pop()
/// Returning with an empty stack is ignored
fn ret(state: &mut State) {
    match state.registers.pop() {
        Some(addr) => state.registers.pc = addr,
        None => {
            warn!("RET with an empty stack at {:03X}", state.registers.pc);
            next(state);
        }
    }
}

/// PC = addr
fn jp(state: &mut State, addr: u16) {
    state.registers.pc = addr & ADDRESS_MASK;
}

/// STACK.push(PC + 2); PC = addr
/// Calling with a full stack is ignored
fn call(state: &mut State, addr: u16) {
    let return_addr = state.registers.pc.wrapping_add(0x2);
    if state.registers.push(return_addr) {
        jp(state, addr);
    } else {
        warn!("CALL with a full stack at {:03X}", state.registers.pc);
        state.registers.pc = return_addr;
    }
}

/// Vx += Vy; VF = overflow
fn add(state: &mut State, x: u8, y: u8) {
    let (a, b) = (vx(&state.registers.v, x), vx(&state.registers.v, y));
    let (res, over) = a.overflowing_add(b);
    ld_with_flag(state, x, res, over);
}

/// Vx -= Vy; VF = 0 if Vy > Vx else 1
fn sub(state: &mut State, x: u8, y: u8) {
    let (a, b) = (vx(&state.registers.v, x), vx(&state.registers.v, y));
    ld_with_flag(state, x, a.wrapping_sub(b), b <= a);
}

/// Vx = Vy - Vx; VF = 0 if Vx > Vy else 1
fn subn(state: &mut State, x: u8, y: u8) {
    let (a, b) = (vx(&state.registers.v, x), vx(&state.registers.v, y));
    ld_with_flag(state, x, b.wrapping_sub(a), a <= b);
}

/// Vx >>= 1; VF = lsb
fn shr(state: &mut State, x: u8) {
    let value = vx(&state.registers.v, x);
    ld_with_flag(state, x, value >> 1, value & 0x1 == 0x1);
}

/// Vx <<= 1; VF = msb
fn shl(state: &mut State, x: u8) {
    let value = vx(&state.registers.v, x);
    ld_with_flag(state, x, value << 1, value & 0x80 == 0x80);
}

/// I = addr
fn ldi(state: &mut State, addr: u16) {
    state.registers.i = addr;
    next(state);
}

/// I += Vx; VF = I > 0xFFF
fn addi(state: &mut State, x: u8) {
    let value = u16::from(vx(&state.registers.v, x));
    let sum = u32::from(state.registers.i) + u32::from(value);
    state.registers.i = state.registers.i.wrapping_add(value);
    state.registers.set_flag(sum > u32::from(ADDRESS_MASK));
    next(state);
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory I..I+n onto the FrameBuffer at x, y.
/// Sets VF if any pixels were erased
fn drw(state: &mut State, x: u8, y: u8, n: u8) {
    let mut sprite = [0; MAX_SPRITE_HEIGHT];
    let rows = usize::from(n).min(MAX_SPRITE_HEIGHT);
    for (row, byte) in sprite.iter_mut().take(rows).enumerate() {
        *byte = state.memory.read(state.registers.i.wrapping_add(row as u16));
    }
    let (left, top) = (vx(&state.registers.v, x), vx(&state.registers.v, y));
    let collision = state.frame_buffer.draw_sprite(left, top, &sprite[..rows]);
    state.registers.set_flag(collision);
    next(state);
}

/// await key release for Vx
/// The PC stays on this instruction until `resume_key_wait` sees a release
fn await_key(state: &mut State, x: u8) {
    debug!("waiting for a key for V{:X}", x);
    state.awaiting_key = Some(x & 0xF);
}

/// mem[I..I+3] = bcd(Vx)
fn bcd(state: &mut State, x: u8) {
    let value = vx(&state.registers.v, x);
    let i = state.registers.i;
    state.memory.write(i, value / 100);
    state.memory.write(i.wrapping_add(1), value / 10 % 10);
    state.memory.write(i.wrapping_add(2), value % 10);
    next(state);
}

/// mem[I..=I+x] = V0..=Vx
/// I is left untouched
fn stor(state: &mut State, x: u8) {
    let i = state.registers.i;
    for r in 0..=x & 0xF {
        let value = vx(&state.registers.v, r);
        state.memory.write(i.wrapping_add(u16::from(r)), value);
    }
    next(state);
}

/// V0..=Vx = mem[I..=I+x]
/// I is left untouched
fn read(state: &mut State, x: u8) {
    let i = state.registers.i;
    for r in 0..=x & 0xF {
        state.registers.v[usize::from(r)] = state.memory.read(i.wrapping_add(u16::from(r)));
    }
    next(state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, STACK_SIZE};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn exec(op: u16, state: &mut State) {
        execute(Instruction::decode(op), state, &mut StdRng::seed_from_u64(0));
    }

    fn pressed(key: usize) -> [bool; 16] {
        let mut keys = [false; 16];
        keys[key] = true;
        keys
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "register index 16 out of range")]
    fn test_register_reads_are_range_checked() {
        let mut state = State::new();
        execute(
            Instruction::SeByte(0x10, 0x00),
            &mut state,
            &mut StdRng::seed_from_u64(0),
        );
    }

    #[test]
    fn test_00e0_cls() {
        let mut state = State::new();
        state.frame_buffer.draw_sprite(0, 0, &[0x80]);
        exec(0x00E0, &mut state);
        assert!(!state.frame_buffer.get(0, 0));
        assert_eq!(state.registers.pc, 0x0202);
    }

    #[test]
    fn test_00ee_ret() {
        let mut state = State::new();
        state.registers.push(0x0ABC);
        exec(0x00EE, &mut state);
        assert_eq!(state.registers.sp, 0x0);
        assert_eq!(state.registers.pc, 0x0ABC);
    }

    #[test]
    fn test_00ee_ret_empty_stack() {
        let mut state = State::new();
        exec(0x00EE, &mut state);
        assert_eq!(state.registers.sp, 0x0);
        assert_eq!(state.registers.pc, 0x0202);
    }

    #[test]
    fn test_1nnn_jp() {
        let mut state = State::new();
        exec(0x1ABC, &mut state);
        assert_eq!(state.registers.pc, 0x0ABC);
    }

    #[test]
    fn test_2nnn_call() {
        let mut state = State::new();
        state.registers.pc = 0x0ABC;
        exec(0x2123, &mut state);
        assert_eq!(state.registers.sp, 0x1);
        assert_eq!(state.registers.stack[0], 0x0ABE);
        assert_eq!(state.registers.pc, 0x0123);
    }

    #[test]
    fn test_2nnn_call_then_ret() {
        let mut state = State::new();
        exec(0x2400, &mut state);
        exec(0x00EE, &mut state);
        assert_eq!(state.registers.pc, 0x0202);
        assert_eq!(state.registers.sp, 0x0);
    }

    #[test]
    fn test_2nnn_call_nested_until_full() {
        let mut state = State::new();
        for depth in 0..STACK_SIZE as u16 {
            let pc = state.registers.pc;
            exec(0x2300 + depth * 2, &mut state);
            assert_eq!(state.registers.pc, 0x0300 + depth * 2, "call {} from {:03X}", depth, pc);
        }
        assert_eq!(usize::from(state.registers.sp), STACK_SIZE);

        let stack = state.registers.stack;
        let pc = state.registers.pc;
        exec(0x2800, &mut state);
        assert_eq!(usize::from(state.registers.sp), STACK_SIZE);
        assert_eq!(state.registers.stack, stack);
        // the call is skipped like any other instruction
        assert_eq!(state.registers.pc, pc + 0x2);
    }

    #[test]
    fn test_3xkk_se_skips() {
        let mut state = State::new();
        state.registers.v[0x1] = 0x11;
        exec(0x3111, &mut state);
        assert_eq!(state.registers.pc, 0x0204);
    }

    #[test]
    fn test_3xkk_se_doesntskip() {
        let mut state = State::new();
        exec(0x3111, &mut state);
        assert_eq!(state.registers.pc, 0x0202);
    }

    #[test]
    fn test_4xkk_sne_skips() {
        let mut state = State::new();
        exec(0x4111, &mut state);
        assert_eq!(state.registers.pc, 0x0204);
    }

    #[test]
    fn test_4xkk_sne_doesntskip() {
        let mut state = State::new();
        state.registers.v[0x1] = 0x11;
        exec(0x4111, &mut state);
        assert_eq!(state.registers.pc, 0x0202);
    }

    #[test]
    fn test_5xy0_se_skips() {
        let mut state = State::new();
        state.registers.v[0x1] = 0x11;
        state.registers.v[0x2] = 0x11;
        exec(0x5120, &mut state);
        assert_eq!(state.registers.pc, 0x0204);
    }

    #[test]
    fn test_5xy0_se_doesntskip() {
        let mut state = State::new();
        state.registers.v[0x1] = 0x11;
        exec(0x5120, &mut state);
        assert_eq!(state.registers.pc, 0x0202);
    }

    #[test]
    fn test_6xkk_ld() {
        let mut state = State::new();
        exec(0x6122, &mut state);
        assert_eq!(state.registers.v[0x1], 0x22);
    }

    #[test]
    fn test_7xkk_add() {
        let mut state = State::new();
        state.registers.v[0x1] = 0x1;
        exec(0x7122, &mut state);
        assert_eq!(state.registers.v[0x1], 0x23);
    }

    #[test]
    fn test_7xkk_add_wraps_without_flag() {
        let mut state = State::new();
        state.registers.v[0x1] = 0xFF;
        exec(0x7102, &mut state);
        assert_eq!(state.registers.v[0x1], 0x01);
        assert_eq!(state.registers.v[0xF], 0x0);
    }

    #[test]
    fn test_8xy0_ld() {
        let mut state = State::new();
        state.registers.v[0x2] = 0x1;
        exec(0x8120, &mut state);
        assert_eq!(state.registers.v[0x1], 0x1);
    }

    #[test]
    fn test_8xy1_or() {
        let mut state = State::new();
        state.registers.v[0x1] = 0x6;
        state.registers.v[0x2] = 0x3;
        exec(0x8121, &mut state);
        assert_eq!(state.registers.v[0x1], 0x7);
    }

    #[test]
    fn test_8xy2_and() {
        let mut state = State::new();
        state.registers.v[0x1] = 0x6;
        state.registers.v[0x2] = 0x3;
        exec(0x8122, &mut state);
        assert_eq!(state.registers.v[0x1], 0x2);
    }

    #[test]
    fn test_8xy3_xor() {
        let mut state = State::new();
        state.registers.v[0x1] = 0x6;
        state.registers.v[0x2] = 0x3;
        exec(0x8123, &mut state);
        assert_eq!(state.registers.v[0x1], 0x5);
    }

    #[test]
    fn test_8xy4_add_nocarry() {
        let mut state = State::new();
        state.registers.v[0x1] = 0xEE;
        state.registers.v[0x2] = 0x11;
        exec(0x8124, &mut state);
        assert_eq!(state.registers.v[0x1], 0xFF);
        assert_eq!(state.registers.v[0xF], 0x0);
    }

    #[test]
    fn test_8xy4_add_carry() {
        let mut state = State::new();
        state.registers.v[0x1] = 0xFF;
        state.registers.v[0x2] = 0x01;
        exec(0x8124, &mut state);
        assert_eq!(state.registers.v[0x1], 0x00);
        assert_eq!(state.registers.v[0xF], 0x1);
    }

    #[test]
    fn test_8fy4_add_result_wins_over_flag() {
        let mut state = State::new();
        state.registers.v[0xF] = 0x10;
        state.registers.v[0x1] = 0x02;
        exec(0x8F14, &mut state);
        assert_eq!(state.registers.v[0xF], 0x12);
    }

    #[test]
    fn test_8fy5_sub_result_wins_over_flag() {
        let mut state = State::new();
        state.registers.v[0xF] = 0x05;
        state.registers.v[0x1] = 0x0A;
        exec(0x8F15, &mut state);
        assert_eq!(state.registers.v[0xF], 0xFB);
    }

    #[test]
    fn test_8f06_shr_result_wins_over_flag() {
        let mut state = State::new();
        state.registers.v[0xF] = 0x02;
        exec(0x8F06, &mut state);
        assert_eq!(state.registers.v[0xF], 0x01);
    }

    #[test]
    fn test_8f0e_shl_result_wins_over_flag() {
        let mut state = State::new();
        state.registers.v[0xF] = 0x41;
        exec(0x8F0E, &mut state);
        assert_eq!(state.registers.v[0xF], 0x82);
    }

    #[test]
    fn test_8xy5_sub_noborrow() {
        let mut state = State::new();
        state.registers.v[0x1] = 0x33;
        state.registers.v[0x2] = 0x11;
        exec(0x8125, &mut state);
        assert_eq!(state.registers.v[0x1], 0x22);
        assert_eq!(state.registers.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy5_sub_borrow() {
        let mut state = State::new();
        state.registers.v[0x1] = 0x05;
        state.registers.v[0x2] = 0x0A;
        exec(0x8125, &mut state);
        assert_eq!(state.registers.v[0x1], 0xFB);
        assert_eq!(state.registers.v[0xF], 0x0);
    }

    #[test]
    fn test_8xy5_sub_equal_is_no_borrow() {
        let mut state = State::new();
        state.registers.v[0x1] = 0x11;
        state.registers.v[0x2] = 0x11;
        exec(0x8125, &mut state);
        assert_eq!(state.registers.v[0x1], 0x00);
        assert_eq!(state.registers.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy6_shr_lsb() {
        let mut state = State::new();
        state.registers.v[0x1] = 0x3;
        exec(0x8106, &mut state);
        assert_eq!(state.registers.v[0x1], 0x1);
        assert_eq!(state.registers.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy6_shr_nolsb() {
        let mut state = State::new();
        state.registers.v[0x1] = 0x4;
        exec(0x8106, &mut state);
        assert_eq!(state.registers.v[0x1], 0x2);
        assert_eq!(state.registers.v[0xF], 0x0);
    }

    #[test]
    fn test_8xy7_subn_noborrow() {
        let mut state = State::new();
        state.registers.v[0x1] = 0x11;
        state.registers.v[0x2] = 0x33;
        exec(0x8127, &mut state);
        assert_eq!(state.registers.v[0x1], 0x22);
        assert_eq!(state.registers.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy7_subn_borrow() {
        let mut state = State::new();
        state.registers.v[0x1] = 0x0A;
        state.registers.v[0x2] = 0x05;
        exec(0x8127, &mut state);
        assert_eq!(state.registers.v[0x1], 0xFB);
        assert_eq!(state.registers.v[0xF], 0x0);
    }

    #[test]
    fn test_8xye_shl_msb() {
        let mut state = State::new();
        state.registers.v[0x1] = 0xFF;
        exec(0x810E, &mut state);
        assert_eq!(state.registers.v[0x1], 0xFE);
        assert_eq!(state.registers.v[0xF], 0x1);
    }

    #[test]
    fn test_8xye_shl_nomsb() {
        let mut state = State::new();
        state.registers.v[0x1] = 0x4;
        exec(0x810E, &mut state);
        assert_eq!(state.registers.v[0x1], 0x8);
        assert_eq!(state.registers.v[0xF], 0x0);
    }

    #[test]
    fn test_9xy0_sne_skips() {
        let mut state = State::new();
        state.registers.v[0x1] = 0x11;
        exec(0x9120, &mut state);
        assert_eq!(state.registers.pc, 0x0204);
    }

    #[test]
    fn test_9xy0_sne_doesntskip() {
        let mut state = State::new();
        state.registers.v[0x1] = 0x11;
        state.registers.v[0x2] = 0x11;
        exec(0x9120, &mut state);
        assert_eq!(state.registers.pc, 0x0202);
    }

    #[test]
    fn test_annn_ld() {
        let mut state = State::new();
        exec(0xAABC, &mut state);
        assert_eq!(state.registers.i, 0xABC);
    }

    #[test]
    fn test_bnnn_jp() {
        let mut state = State::new();
        state.registers.v[0x0] = 0x2;
        exec(0xBABC, &mut state);
        assert_eq!(state.registers.pc, 0xABE);
    }

    #[test]
    fn test_bnnn_jp_masks_address() {
        let mut state = State::new();
        state.registers.v[0x0] = 0x10;
        exec(0xBFF8, &mut state);
        assert_eq!(state.registers.pc, 0x008);
    }

    #[test]
    fn test_cxkk_rnd_is_masked() {
        let mut state = State::new();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            execute(Instruction::decode(0xC10F), &mut state, &mut rng);
            assert_eq!(state.registers.v[0x1] & 0xF0, 0x0);
        }
        execute(Instruction::decode(0xC100), &mut state, &mut rng);
        assert_eq!(state.registers.v[0x1], 0x0);
    }

    #[test]
    fn test_cxkk_rnd_is_deterministic_for_a_seed() {
        let mut a = State::new();
        let mut b = State::new();
        execute(Instruction::decode(0xC1FF), &mut a, &mut StdRng::seed_from_u64(42));
        execute(Instruction::decode(0xC1FF), &mut b, &mut StdRng::seed_from_u64(42));
        assert_eq!(a.registers.v[0x1], b.registers.v[0x1]);
    }

    #[test]
    fn test_dxyn_drw_draws() {
        let mut state = State::new();
        state.registers.v[0x0] = 0x1;
        // Draw the 0x0 sprite with a 1x 1y offset
        exec(0xD005, &mut state);
        let expected = [
            [true, true, true, true],
            [true, false, false, true],
            [true, false, false, true],
            [true, false, false, true],
            [true, true, true, true],
        ];
        for (row, pixels) in expected.iter().enumerate() {
            for (col, &pixel) in pixels.iter().enumerate() {
                assert_eq!(state.frame_buffer.get(col + 1, row + 1), pixel);
            }
        }
        assert_eq!(state.registers.v[0xF], 0x0);
        assert_eq!(state.registers.pc, 0x0202);
    }

    #[test]
    fn test_dxyn_drw_collides() {
        let mut state = State::new();
        state.frame_buffer.draw_sprite(0, 0, &[0x80]);
        exec(0xD001, &mut state);
        assert_eq!(state.registers.v[0xF], 0x1)
    }

    #[test]
    fn test_dxyn_drw_twice_restores() {
        let mut state = State::new();
        state.registers.v[0x0] = 30;
        state.registers.v[0x1] = 12;
        state.registers.i = 0x0A * 5;
        let blank = state.frame_buffer;
        exec(0xD015, &mut state);
        assert_eq!(state.registers.v[0xF], 0x0);
        assert_ne!(state.frame_buffer, blank);
        exec(0xD015, &mut state);
        assert_eq!(state.registers.v[0xF], 0x1);
        assert_eq!(state.frame_buffer, blank);
    }

    #[test]
    fn test_dxyn_drw_clips() {
        let mut state = State::new();
        state.registers.v[0x0] = (DISPLAY_WIDTH - 2) as u8;
        state.registers.v[0x1] = (DISPLAY_HEIGHT - 1) as u8;
        state.memory.write(0x300, 0xFF);
        state.memory.write(0x301, 0xFF);
        state.registers.i = 0x300;
        exec(0xD012, &mut state);
        let lit = state.frame_buffer.rows().flatten().filter(|&&p| p).count();
        assert_eq!(lit, 2);
        assert!(!state.frame_buffer.get(0, 0));
    }

    #[test]
    fn test_ex9e_skp_skips() {
        let mut state = State::new();
        state.keypad.refresh(pressed(0xE), [false; 16]);
        state.registers.v[0x1] = 0xE;
        exec(0xE19E, &mut state);
        assert_eq!(state.registers.pc, 0x0204);
    }

    #[test]
    fn test_ex9e_skp_doesntskip() {
        let mut state = State::new();
        exec(0xE19E, &mut state);
        assert_eq!(state.registers.pc, 0x0202);
    }

    #[test]
    fn test_exa1_sknp_skips() {
        let mut state = State::new();
        exec(0xE1A1, &mut state);
        assert_eq!(state.registers.pc, 0x0204);
    }

    #[test]
    fn test_exa1_sknp_doesntskip() {
        let mut state = State::new();
        state.keypad.refresh(pressed(0xE), [false; 16]);
        state.registers.v[0x1] = 0xE;
        exec(0xE1A1, &mut state);
        assert_eq!(state.registers.pc, 0x0202);
    }

    #[test]
    fn test_fx07_ld() {
        let mut state = State::new();
        state.timers.delay = 0xF;
        exec(0xF107, &mut state);
        assert_eq!(state.registers.v[0x1], 0xF);
    }

    #[test]
    fn test_fx0a_ld_sets_awaiting_key() {
        let mut state = State::new();
        exec(0xF10A, &mut state);
        assert_eq!(state.awaiting_key, Some(0x1));
        assert_eq!(state.registers.pc, 0x0200);
    }

    #[test]
    fn test_fx0a_resumes_on_release() {
        let mut state = State::new();
        exec(0xF10A, &mut state);
        assert!(!resume_key_wait(&mut state));
        assert_eq!(state.registers.pc, 0x0200);

        // holding a key isn't enough, it has to be released
        state.keypad.refresh(pressed(0x7), [false; 16]);
        assert!(!resume_key_wait(&mut state));
        assert_eq!(state.registers.pc, 0x0200);

        state.keypad.refresh([false; 16], pressed(0x7));
        assert!(resume_key_wait(&mut state));
        assert_eq!(state.registers.v[0x1], 0x7);
        assert_eq!(state.registers.pc, 0x0202);
        assert_eq!(state.awaiting_key, None);
    }

    #[test]
    fn test_resume_without_wait_is_noop() {
        let mut state = State::new();
        assert!(resume_key_wait(&mut state));
        assert_eq!(state.registers.pc, 0x0200);
    }

    #[test]
    fn test_fx15_ld() {
        let mut state = State::new();
        state.registers.v[0x1] = 0xF;
        exec(0xF115, &mut state);
        assert_eq!(state.timers.delay, 0xF);
    }

    #[test]
    fn test_fx18_ld() {
        let mut state = State::new();
        state.registers.v[0x1] = 0xF;
        exec(0xF118, &mut state);
        assert_eq!(state.timers.sound, 0xF);
    }

    #[test]
    fn test_fx1e_add() {
        let mut state = State::new();
        state.registers.i = 0x1;
        state.registers.v[0x1] = 0x1;
        exec(0xF11E, &mut state);
        assert_eq!(state.registers.i, 0x2);
        assert_eq!(state.registers.v[0xF], 0x0);
    }

    #[test]
    fn test_fx1e_add_past_address_space_sets_flag() {
        let mut state = State::new();
        state.registers.i = 0xFFF;
        state.registers.v[0x1] = 0x1;
        exec(0xF11E, &mut state);
        assert_eq!(state.registers.i, 0x1000);
        assert_eq!(state.registers.v[0xF], 0x1);
    }

    #[test]
    fn test_fx29_ld() {
        let mut state = State::new();
        state.registers.v[0x1] = 0x2;
        exec(0xF129, &mut state);
        assert_eq!(state.registers.i, 0xA);
    }

    #[test]
    fn test_fx29_ld_uses_low_nibble() {
        let mut state = State::new();
        state.registers.v[0x1] = 0x3F;
        exec(0xF129, &mut state);
        assert_eq!(state.registers.i, 0x4B);
    }

    #[test]
    fn test_fx33_ld() {
        let mut state = State::new();
        // 0x7B -> 123
        state.registers.v[0x1] = 0x7B;
        state.registers.i = 0x200;
        exec(0xF133, &mut state);
        assert_eq!(state.memory.as_slice()[0x200..0x203], [0x1, 0x2, 0x3]);
        assert_eq!(state.registers.i, 0x200);
    }

    #[test]
    fn test_fx_55_ld() {
        let mut state = State::new();
        state.registers.i = 0x300;
        state.registers.v[0x0..0x5].copy_from_slice(&[0x1, 0x2, 0x3, 0x4, 0x5]);
        exec(0xF455, &mut state);
        assert_eq!(state.memory.as_slice()[0x300..0x306], [0x1, 0x2, 0x3, 0x4, 0x5, 0x0]);
        assert_eq!(state.registers.i, 0x300);
    }

    #[test]
    fn test_fx_65_ld() {
        let mut state = State::new();
        state.registers.i = 0x300;
        for (offset, byte) in [0x1, 0x2, 0x3, 0x4, 0x5, 0x6].iter().enumerate() {
            state.memory.write(0x300 + offset as u16, *byte);
        }
        exec(0xF465, &mut state);
        assert_eq!(state.registers.v[0x0..0x6], [0x1, 0x2, 0x3, 0x4, 0x5, 0x0]);
        assert_eq!(state.registers.i, 0x300);
    }

    #[test]
    fn test_fx55_fx65_round_trip() {
        let mut state = State::new();
        state.registers.i = 0x400;
        state.registers.v = [0xA5; 16];
        state.registers.v[0x0..0x8].copy_from_slice(&[9, 8, 7, 6, 5, 4, 3, 2]);
        let original = state.registers.v;
        exec(0xF755, &mut state);
        state.registers.v = [0; 16];
        exec(0xF765, &mut state);
        assert_eq!(state.registers.v[..0x8], original[..0x8]);
    }

    #[test]
    fn test_unknown_is_skipped() {
        let mut state = State::new();
        let before = state.clone();
        exec(0x0123, &mut state);
        assert_eq!(state.registers.pc, 0x0202);
        state.registers.pc = before.registers.pc;
        assert_eq!(state, before);
    }
}
