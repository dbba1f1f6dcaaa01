use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// Line-oriented console over a generic reader/writer pair.
///
/// Production code runs over stdio; tests script whole flows by constructing
/// one over in-memory buffers.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Console {
            input: BufReader::new(io::stdin()),
            output: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Print a prompt with no trailing newline and read one line of input.
    /// The trailing line terminator is stripped; interior whitespace is kept
    /// so each validator can apply its own trimming rules.
    pub fn prompt(&mut self, message: &str) -> io::Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Print one full line of output.
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    /// Consume the console and hand back the writer, so scripted runs can
    /// inspect everything that was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let n = self.input.read_line(&mut line)?;
        if n == 0 {
            // Input exhausted; the retry loops would otherwise spin forever.
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "end of input while waiting for a response",
            ));
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}
