//! Step gates
//!
//! Gantree: L3_Harness → StepGate
//!
//! Optional pause between trials. Automated runs use `NoPause`; the CLI's
//! interactive mode waits for the user with `PromptGate`.

use qsearch_core::{QsError, QsResult};
use std::io::{BufRead, Write};

/// Hook run after each trial has been reported
/// Gantree: StepGate // 단계 게이트
pub trait StepGate {
    /// Block until the next trial may start
    fn wait(&mut self, trial: u64) -> QsResult<()>;
}

impl<G: StepGate + ?Sized> StepGate for &mut G {
    fn wait(&mut self, trial: u64) -> QsResult<()> {
        (**self).wait(trial)
    }
}

/// Never blocks
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPause;

impl StepGate for NoPause {
    fn wait(&mut self, _trial: u64) -> QsResult<()> {
        Ok(())
    }
}

/// Prompts and waits for one input line
/// Gantree: PromptGate // 입력 대기
pub struct PromptGate<R: BufRead, W: Write> {
    input: R,
    output: W,
    exhausted: bool,
}

impl<R: BufRead, W: Write> PromptGate<R, W> {
    /// Prompt on `output`, read from `input`
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            exhausted: false,
        }
    }

    /// Recover the output writer
    pub fn into_output(self) -> W {
        self.output
    }
}

impl PromptGate<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Prompt on stdout, read from stdin
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> StepGate for PromptGate<R, W> {
    fn wait(&mut self, _trial: u64) -> QsResult<()> {
        // Once input hits EOF there is nobody left to wait for
        if self.exhausted {
            return Ok(());
        }

        writeln!(self.output, "Press Enter to continue...")
            .and_then(|_| self.output.flush())
            .map_err(|e| QsError::ReportError(e.to_string()))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| QsError::ReportError(e.to_string()))?;
        if read == 0 {
            self.exhausted = true;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_no_pause() {
        let mut gate = NoPause;
        for trial in 1..=3 {
            assert!(gate.wait(trial).is_ok());
        }
    }

    #[test]
    fn test_prompt_reads_one_line_per_trial() {
        let input = Cursor::new("\n\n");
        let mut gate = PromptGate::new(input, Vec::new());

        gate.wait(1).unwrap();
        gate.wait(2).unwrap();

        let prompts = String::from_utf8(gate.into_output()).unwrap();
        assert_eq!(prompts.matches("Press Enter to continue...").count(), 2);
    }

    #[test]
    fn test_prompt_stops_at_eof() {
        let input = Cursor::new("");
        let mut gate = PromptGate::new(input, Vec::new());

        for trial in 1..=5 {
            gate.wait(trial).unwrap();
        }

        let prompts = String::from_utf8(gate.into_output()).unwrap();
        assert_eq!(prompts.matches("Press Enter").count(), 1);
    }
}
