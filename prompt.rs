use std::io::{BufRead, Write};

use log::debug;

use crate::error::{Result, TextStatsError};

/// Print a prompt and read one line. End of input is an error.
fn read_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(TextStatsError::InputClosed);
    }
    Ok(line.trim().to_string())
}

/// Ask for a menu number in `1..=count` until a valid one is entered.
pub fn choose_text<R: BufRead, W: Write>(input: &mut R, output: &mut W, count: usize) -> Result<usize> {
    let prompt = format!("\nChoose a text you want to compare: (1-{}) ", count);
    loop {
        let answer = read_line(input, output, &prompt)?;
        match answer.parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => return Ok(n),
            _ => {
                debug!("rejected menu answer {:?}", answer);
                writeln!(output, "Invalid entry, try again.")?;
            }
        }
    }
}

pub fn ask_word<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    read_line(input, output, "\nEnter a word to search in the texts: ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn accepts_valid_choice() {
        let mut input = Cursor::new("3\n");
        let mut output = Vec::new();
        assert_eq!(choose_text(&mut input, &mut output, 5).unwrap(), 3);
        let shown = String::from_utf8(output).unwrap();
        assert_eq!(shown, "\nChoose a text you want to compare: (1-5) ");
    }

    #[test]
    fn reprompts_until_valid() {
        let mut input = Cursor::new("abc\n0\n6\n-1\n\n 2 \n");
        let mut output = Vec::new();
        assert_eq!(choose_text(&mut input, &mut output, 5).unwrap(), 2);
        let shown = String::from_utf8(output).unwrap();
        assert_eq!(shown.matches("Invalid entry, try again.").count(), 5);
        assert_eq!(shown.matches("Choose a text").count(), 6);
    }

    #[test]
    fn end_of_input_is_an_error() {
        let mut input = Cursor::new("9\n");
        let mut output = Vec::new();
        let err = choose_text(&mut input, &mut output, 5).unwrap_err();
        assert!(matches!(err, TextStatsError::InputClosed));
    }

    #[test]
    fn search_word_is_trimmed() {
        let mut input = Cursor::new("  Alice \n");
        let mut output = Vec::new();
        assert_eq!(ask_word(&mut input, &mut output).unwrap(), "Alice");
    }
}
