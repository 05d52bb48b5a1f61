use std::io::{self, BufRead, Write};

/// Line-oriented terminal I/O with the prompt/re-prompt loops used by the
/// menu and the game session.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Write text as-is and flush so prompts show before reading
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    /// Write a line of text
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    pub fn put_blank_line(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    /// Read one line without its line terminator. End of input is an
    /// `UnexpectedEof` error.
    pub fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Prompt until the player types an integer
    pub fn input_int(&mut self, prompt: &str, error_message: &str) -> io::Result<i64> {
        let mut rejected = false;
        loop {
            if rejected {
                self.say(error_message)?;
                self.put_blank_line()?;
            }

            self.print(prompt)?;
            let line = self.read_line()?;
            match parse_leading_int(&line) {
                // A bare zero is only accepted when it is literally "0".
                Some(0) if line != "0" => rejected = true,
                Some(value) => return Ok(value),
                None => rejected = true,
            }
        }
    }

    /// Prompt until the player types an integer in `min..=max`
    pub fn input_int_between(
        &mut self,
        prompt: &str,
        min: i64,
        max: i64,
        error_message: &str,
    ) -> io::Result<i64> {
        loop {
            let value = self.input_int(prompt, error_message)?;
            if (min..=max).contains(&value) {
                return Ok(value);
            }
            self.say(error_message)?;
        }
    }

    /// Ask a yes/no question until answered
    pub fn ask_yes_no(&mut self, question: &str) -> io::Result<bool> {
        loop {
            self.print(&format!("{question} (y/n) "))?;
            let answer = self.read_line()?;
            match answer.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please answer y or n.")?,
            }
        }
    }
}

/// Integer prefix of `text`: leading whitespace, an optional sign, then
/// digits. Anything after the digits is ignored. `None` when there are no
/// digits or the value does not fit.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'-') => ("-", &text[1..]),
        Some(b'+') => ("", &text[1..]),
        _ => ("", text),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    format!("{sign}{}", &rest[..digits]).parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const ERROR: &str = "Invalid input: please enter an integer number.";

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("3"), Some(3));
        assert_eq!(parse_leading_int("-120"), Some(-120));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int("  42"), Some(42));
        assert_eq!(parse_leading_int("123asdf"), Some(123));
        assert_eq!(parse_leading_int("0"), Some(0));
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("edf"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("99999999999999999999"), None);
    }

    #[test]
    fn test_input_int_prints_prompt() {
        let mut c = console("3\n");
        assert_eq!(c.input_int("Enter integer: ", ERROR).unwrap(), 3);
        assert_eq!(output(c), "Enter integer: ");
    }

    #[test]
    fn test_input_int_accepts_zero_and_negatives() {
        let mut c = console("0\n-120\n");
        assert_eq!(c.input_int("", ERROR).unwrap(), 0);
        assert_eq!(c.input_int("", ERROR).unwrap(), -120);
    }

    #[test]
    fn test_input_int_reprompts_until_valid() {
        let mut c = console("\n\n\n3\n");
        assert_eq!(c.input_int("", ERROR).unwrap(), 3);
        assert_eq!(output(c), format!("{ERROR}\n\n").repeat(3));
    }

    #[test]
    fn test_input_int_rejects_disguised_zero() {
        let mut c = console("0abc\n5\n");
        assert_eq!(c.input_int("> ", ERROR).unwrap(), 5);
        assert_eq!(output(c), format!("> {ERROR}\n\n> "));
    }

    #[test]
    fn test_input_int_between_rejects_out_of_range() {
        let mut c = console("9\n-1\n4\n");
        assert_eq!(c.input_int_between("? ", 0, 6, "bad").unwrap(), 4);
        assert_eq!(output(c), "? bad\n? bad\n? ");
    }

    #[test]
    fn test_read_line_reports_eof() {
        let mut c = console("");
        let err = c.read_line().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_read_line_strips_crlf() {
        let mut c = console("play\r\n");
        assert_eq!(c.read_line().unwrap(), "play");
    }

    #[test]
    fn test_ask_yes_no() {
        let mut c = console("maybe\nY\nno\n");
        assert!(c.ask_yes_no("Again?").unwrap());
        assert!(!c.ask_yes_no("Again?").unwrap());
        assert_eq!(
            output(c),
            "Again? (y/n) Please answer y or n.\nAgain? (y/n) Again? (y/n) "
        );
    }
}
