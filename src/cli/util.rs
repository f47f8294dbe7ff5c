use anyhow::Result;
use std::io::{self, Write};

pub(crate) fn prompt_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub(crate) fn prompt_nonempty_string(prompt: &str) -> Result<String> {
    loop {
        let value = prompt_line(&format!("{prompt}: "))?;
        if !value.is_empty() {
            return Ok(value);
        }
        println!("❌ A value is required.");
    }
}

pub(crate) fn prompt_optional_string(prompt: &str) -> Result<String> {
    prompt_line(&format!("{prompt}: "))
}

pub(crate) fn prompt_positive_u32(prompt: &str) -> Result<u32> {
    loop {
        let value = prompt_line(&format!("{prompt}: "))?;
        match value.parse::<u32>() {
            Ok(parsed) if parsed > 0 => return Ok(parsed),
            Ok(_) => println!("❌ Value must be greater than zero."),
            Err(_) => println!("❌ Please enter a valid number."),
        }
    }
}

pub(crate) fn prompt_positive_f64(prompt: &str) -> Result<f64> {
    loop {
        let value = prompt_line(&format!("{prompt}: "))?;
        match value.parse::<f64>() {
            Ok(parsed) if parsed > 0.0 => return Ok(parsed),
            Ok(_) => println!("❌ Value must be greater than zero."),
            Err(_) => println!("❌ Please enter a valid number."),
        }
    }
}

pub(crate) fn prompt_timeout(default: u64) -> Result<u64> {
    loop {
        let value = prompt_line(&format!("⏱️  Enter timeout in seconds (default: {default}): "))?;

        if value.is_empty() {
            return Ok(default);
        }

        match value.parse::<u64>() {
            Ok(timeout) if timeout > 0 => return Ok(timeout),
            Ok(_) => println!("❌ Timeout must be a positive number."),
            Err(_) => println!("❌ Please enter a valid number."),
        }
    }
}

pub(crate) fn prompt_string_with_default(prompt: &str, default: &str) -> Result<String> {
    let value = prompt_line(&format!("{prompt} (default: {default}): "))?;

    if value.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(value)
    }
}

pub(crate) fn prompt_u32_with_default(prompt: &str, default: u32) -> Result<u32> {
    loop {
        let value = prompt_line(&format!("{prompt} (default: {default}): "))?;

        if value.is_empty() {
            return Ok(default);
        }

        match value.parse::<u32>() {
            Ok(parsed) if parsed > 0 => return Ok(parsed),
            Ok(_) => println!("❌ Value must be greater than zero."),
            Err(_) => println!("❌ Please enter a valid number."),
        }
    }
}

pub(crate) fn mask_api_key(key: &str) -> String {
    if key.is_empty() {
        return "(not set)".to_string();
    }

    let visible = key.len().min(8);
    format!("{}***", &key[..visible])
}
