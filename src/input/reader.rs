use anyhow::{Context, Result, bail};
use std::io::{self, IsTerminal, Read};

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

pub struct InputReader;

impl InputReader {
    /// Joins the command-line words with single spaces.
    ///
    /// With no words and a piped stdin, the text is read from stdin instead.
    /// An interactive terminal is never waited on.
    pub fn read(words: &[String]) -> Result<String> {
        if words.is_empty() && !io::stdin().is_terminal() {
            return Self::read_stdin(io::stdin().lock());
        }
        Ok(Self::join_words(words))
    }

    fn join_words(words: &[String]) -> String {
        words.join(" ")
    }

    fn read_stdin(mut source: impl Read) -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];

        loop {
            let bytes_read = source
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);

            if buffer.len() > MAX_INPUT_SIZE {
                bail!(
                    "Error: Input size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
                     Consider splitting the input into smaller parts.",
                    buffer.len() as f64 / 1024.0 / 1024.0
                );
            }
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}
