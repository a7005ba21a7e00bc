use std::sync::OnceLock;

use regex::Regex;

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Matches `{{ env.VAR }}`; group 1 is the variable name
    RE.get_or_init(|| Regex::new(r"\{\{\s*env\.([A-Za-z0-9_]+)\s*\}\}").expect("must be valid regex"))
}

/// Expand `{{ env.VAR }}` placeholders in a raw TOML string
///
/// Expansion happens on the raw config text before deserialization, so the
/// config structs stay plain. TOML comment lines pass through unchanged;
/// referencing an unset variable is an error.
pub fn expand_env(input: &str) -> Result<String, String> {
    let mut output = String::with_capacity(input.len());

    for (i, line) in input.lines().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        if line.trim_start().starts_with('#') {
            output.push_str(line);
            continue;
        }

        let mut last_end = 0;
        for captures in placeholder().captures_iter(line) {
            let overall = captures.get(0).expect("capture 0 always present");
            let var_name = captures.get(1).expect("group 1 always present").as_str();

            output.push_str(&line[last_end..overall.start()]);

            match std::env::var(var_name) {
                Ok(value) => output.push_str(&value),
                Err(_) => return Err(format!("environment variable not found: `{var_name}`")),
            }

            last_end = overall.end();
        }
        output.push_str(&line[last_end..]);
    }

    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_placeholders() {
        let input = "key = \"value\"";
        assert_eq!(expand_env(input).unwrap(), input);
    }

    #[test]
    fn single_env_var() {
        temp_env::with_var("MURMUR_TEST_VAR", Some("hello"), || {
            let result = expand_env("key = \"{{ env.MURMUR_TEST_VAR }}\"").unwrap();
            assert_eq!(result, "key = \"hello\"");
        });
    }

    #[test]
    fn multiple_vars_on_one_line() {
        let vars = [("MURMUR_FOO", Some("foo")), ("MURMUR_BAR", Some("bar"))];
        temp_env::with_vars(vars, || {
            let result = expand_env("key = \"{{ env.MURMUR_FOO }}/{{ env.MURMUR_BAR }}\"").unwrap();
            assert_eq!(result, "key = \"foo/bar\"");
        });
    }

    #[test]
    fn missing_env_var() {
        temp_env::with_var_unset("MURMUR_MISSING_VAR", || {
            let err = expand_env("key = \"{{ env.MURMUR_MISSING_VAR }}\"").unwrap_err();
            assert!(err.contains("MURMUR_MISSING_VAR"));
        });
    }

    #[test]
    fn commented_lines_skip_expansion() {
        temp_env::with_var_unset("MURMUR_MISSING_VAR", || {
            let input = "# key = \"{{ env.MURMUR_MISSING_VAR }}\"";
            assert_eq!(expand_env(input).unwrap(), input);
        });
    }

    #[test]
    fn trailing_newline_preserved() {
        let input = "key = \"value\"\n";
        assert_eq!(expand_env(input).unwrap(), input);
    }
}
