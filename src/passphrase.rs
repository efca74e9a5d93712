use anyhow::{Result, bail};
use std::io::{self, IsTerminal};
use zeroize::Zeroizing;

pub const PASSPHRASE_ENV: &str = "TELECRYPT_KEY";

/// Reads the device passphrase from the environment, piped stdin or a prompt.
pub fn read_passphrase() -> Result<Zeroizing<String>> {
    //  Environment Variable
    //  TELECRYPT_KEY="16charSecretKey!" telecrypt seal '{"lux":123}'
    if let Ok(pw) = std::env::var(PASSPHRASE_ENV) {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    //  stdin (Pipeline)
    //  printf "%s" "$DEVICE_KEY" | telecrypt open "$FRAME"
    if !io::stdin().is_terminal() {
        let mut buf = Zeroizing::new(String::new());
        io::stdin().read_line(&mut buf)?;
        trim_newline(&mut buf);

        if !buf.is_empty() {
            return Ok(buf);
        }
    }

    //  Interactive (TTY)
    if io::stdin().is_terminal() {
        let pw = Zeroizing::new(rpassword::prompt_password("Device key: ")?);
        if !pw.is_empty() {
            return Ok(pw);
        }
    }

    bail!("no device key provided (set {PASSPHRASE_ENV}, pipe it on stdin or type it at the prompt)")
}

fn trim_newline(s: &mut String) {
    while s.ends_with('\n') || s.ends_with('\r') {
        s.pop();
    }
}
