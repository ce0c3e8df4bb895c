//! The virtual machine: dispatch loop, register file, flags, and the
//! single-slot saved-return mechanism.
//!
//! The dispatch loop is one big `match` on the current instruction with a
//! private method per instruction, the same shape as the teacher's
//! `CPU::execute`. Unlike the reference implementation (which recurses once
//! per instruction), the loop here is a plain `while`; see the dispatch-loop
//! design note.

use crate::errors::RuntimeError;
use crate::number::Number;
use crate::parser::Program;
use crate::registers::{FlagRegister, RegisterId, Registers};
use crate::tokenizer::{Opcode, Token};
use std::io::Write;

/// Execution state for a single run of a linked [`Program`].
pub struct Machine<'a> {
    program: &'a Program,
    registers: Registers,
    flags: FlagRegister,
    ip: usize,
    ret: usize,
}

impl<'a> Machine<'a> {
    pub fn new(program: &'a Program) -> Self {
        Machine {
            program,
            registers: Registers::default(),
            flags: FlagRegister::default(),
            ip: 0,
            ret: 0,
        }
    }

    /// Runs the program to completion, writing `putc`/`log` output to
    /// `out`. Returns the process exit code on normal termination
    /// (including an explicit `exit N`), or a [`RuntimeError`] on a fatal
    /// runtime condition.
    pub fn run(&mut self, out: &mut impl Write) -> Result<i32, RuntimeError> {
        while self.ip < self.program.len() {
            let line = self.program.get(self.ip).expect("ip bounds checked above");
            let origin_line = line.origin_line;
            let args = line.args.clone();

            let mut advance = true;

            match line.instruction {
                Opcode::Putc => self.putc(&args, out),
                Opcode::Load => self.load(&args),
                Opcode::Go => {
                    self.go(&args);
                    advance = false;
                }
                Opcode::Home => {
                    self.home();
                    advance = false;
                }
                Opcode::Exit => return Ok(self.exit_code(&args)),
                Opcode::Eval => self.eval(&args),
                Opcode::Ifeq => advance = !self.branch_if(self.flags.feq, &args),
                Opcode::Ifne => advance = !self.branch_if(self.flags.fne, &args),
                Opcode::Ifgt => advance = !self.branch_if(self.flags.fgt, &args),
                Opcode::Iflt => advance = !self.branch_if(self.flags.flt, &args),
                Opcode::Ifge => advance = !self.branch_if(self.flags.fge, &args),
                Opcode::Ifle => advance = !self.branch_if(self.flags.fle, &args),
                Opcode::Add => self.arith(&args, |a, b| a + b),
                Opcode::Sub => self.arith(&args, |a, b| a - b),
                Opcode::Mul => self.arith(&args, |a, b| a * b),
                Opcode::Idiv => self.idiv(&args, origin_line)?,
                Opcode::Div => self.div(&args, origin_line)?,
                Opcode::Log => self.log(&args, out),
                Opcode::Data => {
                    return Err(RuntimeError::UnsupportedInstruction {
                        origin_line,
                        instruction: Opcode::Data.name().to_string(),
                    })
                }
            }

            if advance {
                self.ip += 1;
            }
        }

        Ok(0)
    }

    fn extract(&self, token: &Token) -> Number {
        match token {
            Token::Value(n) => *n,
            Token::Memory(r) => self.registers.get(*r),
            other => unreachable!("argument shape already validated: {other:?}"),
        }
    }

    fn register_arg(&self, token: &Token) -> RegisterId {
        match token {
            Token::Memory(r) => *r,
            other => unreachable!("argument shape already validated: {other:?}"),
        }
    }

    fn address_arg(&self, token: &Token) -> usize {
        match token {
            Token::Address(a) => *a,
            other => unreachable!("argument shape already validated: {other:?}"),
        }
    }

    fn putc(&self, args: &[Token], out: &mut impl Write) {
        let value = self.extract(&args[0]).as_i64();
        let ch = char::from_u32(value as u32).unwrap_or('\u{FFFD}');
        let _ = write!(out, "{ch}");
    }

    fn load(&mut self, args: &[Token]) {
        let dest = self.register_arg(&args[0]);
        let value = self.extract(&args[1]);
        self.registers.set(dest, value);
    }

    fn go(&mut self, args: &[Token]) {
        let target = self.address_arg(&args[0]);
        self.ret = self.ip;
        self.ip = target;
    }

    fn home(&mut self) {
        self.ip = self.ret + 1;
    }

    fn exit_code(&self, args: &[Token]) -> i32 {
        self.extract(&args[0]).as_i64() as i32
    }

    fn eval(&mut self, args: &[Token]) {
        let x = self.extract(&args[0]);
        let y = self.extract(&args[1]);
        self.flags.evaluate(x, y);
    }

    /// Returns `true` if the branch was taken (and `ip` already updated).
    fn branch_if(&mut self, flag: bool, args: &[Token]) -> bool {
        if flag {
            self.ip = self.address_arg(&args[0]);
            true
        } else {
            false
        }
    }

    fn arith(&mut self, args: &[Token], op: impl Fn(Number, Number) -> Number) {
        let dest = self.register_arg(&args[0]);
        let lhs = self.registers.get(dest);
        let rhs = self.extract(&args[1]);
        self.registers.set(dest, op(lhs, rhs));
    }

    fn idiv(&mut self, args: &[Token], origin_line: usize) -> Result<(), RuntimeError> {
        let dest = self.register_arg(&args[0]);
        let lhs = self.registers.get(dest);
        let rhs = self.extract(&args[1]);
        if rhs.as_f64() == 0.0 {
            return Err(RuntimeError::ZeroDivision { origin_line });
        }
        self.registers
            .set(dest, Number::Int((lhs.as_f64() / rhs.as_f64()).trunc() as i64));
        Ok(())
    }

    fn div(&mut self, args: &[Token], origin_line: usize) -> Result<(), RuntimeError> {
        let dest = self.register_arg(&args[0]);
        let lhs = self.registers.get(dest);
        let rhs = self.extract(&args[1]);
        if rhs.as_f64() == 0.0 {
            return Err(RuntimeError::ZeroDivision { origin_line });
        }
        self.registers.set(dest, Number::Real(lhs.as_f64() / rhs.as_f64()));
        Ok(())
    }

    fn log(&self, args: &[Token], out: &mut impl Write) {
        let value = self.extract(&args[0]);
        let _ = writeln!(out, "{value}");
    }
}
