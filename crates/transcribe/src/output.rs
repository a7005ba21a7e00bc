//! Parsing of the transcription tool's stdout

/// Line prefixes the tool prints as progress diagnostics
const DIAGNOSTIC_PREFIXES: [&str; 2] = ["Transcribing", "Detecting language"];

/// Placeholder summary when the transcript comes back empty
const EMPTY_SUMMARY: &str = "No summary available.";

/// Number of period-delimited fragments kept in the summary
const SUMMARY_FRAGMENTS: usize = 3;

/// Strip tool diagnostics from raw stdout, leaving the transcript
pub(crate) fn clean_transcript(stdout: &str) -> String {
    stdout
        .lines()
        .filter(|line| !DIAGNOSTIC_PREFIXES.iter().any(|prefix| line.starts_with(prefix)))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Truncate the transcript to its first few period-delimited fragments
///
/// Deliberately naive: splits on the literal period with no sentence
/// detection or language awareness. Kept as-is for behavioral parity with
/// the tool's consumers.
pub(crate) fn summarize(transcription: &str) -> String {
    if transcription.is_empty() {
        return EMPTY_SUMMARY.to_string();
    }

    let mut summary = transcription
        .split('.')
        .take(SUMMARY_FRAGMENTS)
        .collect::<Vec<_>>()
        .join(".");
    summary.push('.');
    summary
}
