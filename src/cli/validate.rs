use std::path::Path;
use std::str::FromStr;

pub fn path(rawpath: &str) -> Result<(), String> {
    if Path::new(&rawpath).exists() {
        Ok(())
    } else {
        Err(format!("{} doesn't exist or there is no permission to read it", rawpath))
    }
}

pub fn writable(rawpath: &str) -> Result<(), String> {
    let parent = Path::new(&rawpath).parent();
    match parent {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            Err(format!("Directory for {} doesn't exist", rawpath))
        }
        _ => Ok(()),
    }
}

pub fn numeric<T>(low: T, upper: T) -> impl Fn(&str) -> Result<(), String>
where
    T: FromStr + std::fmt::Display + std::cmp::PartialOrd + Sized,
{
    move |val: &str| -> Result<(), String> {
        match val.parse::<T>() {
            Ok(x) if low <= x && x <= upper => Ok(()),
            Ok(x) => Err(format!("Value {} is expected to be inside [{}, {}] range", x, low, upper)),
            Err(_) => Err(format!("Failed to parse {}", val)),
        }
    }
}
