//! Detection of the external programs a vanilla server needs

use std::process::Command;

/// Runtime detection result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

impl RuntimeInfo {
    fn missing(name: &'static str) -> Self {
        RuntimeInfo {
            name,
            version: None,
            available: false,
        }
    }
}

/// First non-empty line of a version banner
fn first_line(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string)
}

fn probe(name: &'static str, program: &str, arg: &str) -> RuntimeInfo {
    match Command::new(program).arg(arg).output() {
        Ok(out) if out.status.success() => {
            // java prints its banner on stderr
            let stdout = String::from_utf8_lossy(&out.stdout);
            let stderr = String::from_utf8_lossy(&out.stderr);
            RuntimeInfo {
                name,
                version: first_line(&stdout).or_else(|| first_line(&stderr)),
                available: true,
            }
        }
        _ => RuntimeInfo::missing(name),
    }
}

/// Check if Java is available
pub fn check_java(program: &str) -> RuntimeInfo {
    probe("Java", program, "-version")
}

/// Check if curl is available
pub fn check_curl(program: &str) -> RuntimeInfo {
    probe("curl", program, "--version")
}

/// Probe both programs. Advisory only: a missing program fails later, at the step that runs it.
pub fn check_tools(java_program: &str, download_program: &str) -> Vec<RuntimeInfo> {
    vec![check_curl(download_program), check_java(java_program)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line() {
        assert_eq!(
            first_line("\nopenjdk version \"17.0.8\" 2023-07-18\nOpenJDK Runtime"),
            Some("openjdk version \"17.0.8\" 2023-07-18".to_string())
        );
        assert_eq!(first_line("  \n "), None);
    }

    #[test]
    fn test_missing_program() {
        let info = check_java("definitely-not-java-7f3a");
        assert!(!info.available);
        assert_eq!(info.name, "Java");
        assert!(info.version.is_none());
    }
}
