//! Coprocessor-1 execution. This core classifies FPU encodings (see
//! `instr::decode`) but never executes them: there is no FPU register
//! file or floating-point arithmetic here.

use crate::outcome::Outcome;

pub fn handle() -> Outcome {
    Outcome::Unimplemented
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fpu_is_always_unimplemented() {
        assert_eq!(handle(), Outcome::Unimplemented);
    }
}
