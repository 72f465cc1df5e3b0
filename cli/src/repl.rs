use std::io::{self, BufRead, Write};

const PROMPT: &str = "impact> ";

/// Read one command line from stdin. End of input reads as `exit`.
pub fn readline() -> Result<String, String> {
    write!(io::stdout(), "{PROMPT}").map_err(|e| e.to_string())?;
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut buffer = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut buffer)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("exit".to_string());
    }
    Ok(buffer)
}
