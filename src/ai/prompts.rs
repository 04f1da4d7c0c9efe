//! Prompt templates for the CTF analysis request

use crate::intake::format_size;
use crate::models::FileRecord;

/// System prompt framing the model as a CTF solver
pub const CTF_SYSTEM_PROMPT: &str = r#"You are an expert CTF (Capture The Flag) solver with deep knowledge in:
- Cryptography
- Reverse Engineering
- Web Security
- Binary Analysis
- Steganography
- Digital Forensics
- Pwn (System Exploitation)
- Miscellaneous challenges

When given a file or data, analyze and find solutions for CTF challenges by:
1. Identifying the challenge type
2. Analyzing the provided data
3. Suggesting solution methods
4. Providing possible answers or flags
5. Explaining steps in detail

Respond in English with clear, concise, and actionable solutions"#;

/// Build the user prompt carrying the file payload
pub fn build_analysis_prompt(file: &FileRecord) -> String {
    format!(
        r#"File: {}
Size: {}
Content:
{}

Please analyze this file and find the CTF challenge solution"#,
        file.name,
        format_size(file.size),
        file.content
    )
}
