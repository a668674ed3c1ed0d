// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{Error, ErrorKind, Result, Write};

/// A writer whose every write fails with [`ErrorKind::BrokenPipe`], like a terminal
/// that went away.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrokenPipeWriter;

impl Write for BrokenPipeWriter {
    fn write(&mut self, _buf: &[u8]) -> Result<usize> {
        Err(Error::new(ErrorKind::BrokenPipe, "destination closed"))
    }

    fn flush(&mut self) -> Result<()> {
        Err(Error::new(ErrorKind::BrokenPipe, "destination closed"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_broken_pipe_writer_fails() {
        let error = BrokenPipeWriter.write_all(b"x").err().map(|it| it.kind());
        assert_eq!(error, Some(ErrorKind::BrokenPipe));

        let error = BrokenPipeWriter.flush().err().map(|it| it.kind());
        assert_eq!(error, Some(ErrorKind::BrokenPipe));
    }
}
