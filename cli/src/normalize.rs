use crate::commands::{DocumentCmd, PathCmd};
use crate::error::CliError;

use pathclose::normalize_path_data;
use pathclose::svg::SerializerOptions;
use regex::{Captures, Regex};
use std::io::Write;

// Matches `d="..."` and `d='...'` attributes.
const PATH_DATA_ATTRIBUTE: &str = r#"(?P<name>\sd\s*=\s*)(?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)')"#;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentStats {
    /// Number of `d` attributes found.
    pub paths: usize,
    /// Number of `d` attributes that could not be parsed and were left as is.
    pub skipped: usize,
    /// Number of commands replaced with a close command, over all paths.
    pub closed: usize,
}

pub fn normalize_path(mut cmd: PathCmd) -> Result<(), CliError> {
    let (d, replaced) = normalize_path_data(cmd.input.trim(), &cmd.serializer)?;

    log::info!("closed {} sub-path(s)", replaced);

    if cmd.count {
        writeln!(&mut *cmd.output, "{}", replaced)?;
    } else {
        writeln!(&mut *cmd.output, "{}", d)?;
    }

    Ok(())
}

pub fn normalize_document(mut cmd: DocumentCmd) -> Result<(), CliError> {
    let (document, stats) = rewrite_document(&cmd.input, &cmd.serializer)?;

    log::info!(
        "{} path(s), {} skipped, closed {} sub-path(s)",
        stats.paths,
        stats.skipped,
        stats.closed
    );

    cmd.output.write_all(document.as_bytes())?;
    cmd.output.flush()?;

    Ok(())
}

/// Rewrites the `d` attributes of an SVG document, copying everything else
/// through verbatim.
pub fn rewrite_document(
    src: &str,
    options: &SerializerOptions,
) -> Result<(String, DocumentStats), CliError> {
    let pattern = Regex::new(PATH_DATA_ATTRIBUTE)?;
    let mut stats = DocumentStats::default();

    let document = pattern.replace_all(src, |caps: &Captures| {
        let (quote, value) = match caps.name("dq") {
            Some(value) => ('"', value.as_str()),
            None => ('\'', caps.name("sq").map_or("", |m| m.as_str())),
        };

        stats.paths += 1;

        match normalize_path_data(value, options) {
            Ok((d, replaced)) => {
                stats.closed += replaced;
                format!("{}{}{}{}", &caps["name"], quote, d, quote)
            }
            Err(err) => {
                log::warn!("leaving path #{} untouched: {}", stats.paths, err);
                stats.skipped += 1;
                caps[0].to_string()
            }
        }
    });

    Ok((document.into_owned(), stats))
}

#[test]
fn rewrite_simple_document() {
    let src = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">
  <path id="a" d="M0 0L24 0L24 24L0 0"/>
  <path d='M4 4l10 0l0 10' fill="red"/>
</svg>
"#;

    let (document, stats) = rewrite_document(src, &SerializerOptions::DEFAULT).unwrap();

    assert_eq!(
        document,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">
  <path id="a" d="M 0 0 L 24 0 L 24 24 Z"/>
  <path d='M 4 4 l 10 0 l 0 10' fill="red"/>
</svg>
"#
    );
    assert_eq!(
        stats,
        DocumentStats {
            paths: 2,
            skipped: 0,
            closed: 1
        }
    );
}

#[test]
fn invalid_paths_are_left_untouched() {
    let src = r#"<path d="M 0 0 L x"/><path d = "M1 1H2V1H1"/>"#;

    let (document, stats) = rewrite_document(src, &SerializerOptions::DEFAULT).unwrap();

    assert_eq!(
        document,
        r#"<path d="M 0 0 L x"/><path d = "M 1 1 H 2 V 1 Z"/>"#
    );
    assert_eq!(stats.paths, 2);
    assert_eq!(stats.skipped, 1);
    assert_eq!(stats.closed, 1);
}

#[test]
fn other_attributes_ending_in_d_are_ignored() {
    let src = r#"<path id="M0 0L0 0" data-d="M0 0L0 0"/>"#;

    let (document, stats) = rewrite_document(src, &SerializerOptions::DEFAULT).unwrap();

    assert_eq!(document, src);
    assert_eq!(stats.paths, 0);
}

#[test]
fn attribute_on_its_own_line() {
    let src = "<path\nd=\"m2 2l3 0l-3 0\"\n\td='M0 0H1L0 0'/>";

    let (document, stats) = rewrite_document(src, &SerializerOptions::DEFAULT).unwrap();

    assert_eq!(document, "<path\nd=\"m 2 2 l 3 0 Z\"\n\td='M 0 0 H 1 Z'/>");
    assert_eq!(stats.paths, 2);
    assert_eq!(stats.closed, 2);
}

#[test]
fn document_to_file() {
    use std::fs;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("icon.svg");

    let mut options = SerializerOptions::DEFAULT;
    options.lowercase_close = true;

    normalize_document(DocumentCmd {
        input: r#"<svg><path d="m1 1h1v1h-1v-1"/></svg>"#.to_string(),
        output: Box::new(fs::File::create(&path).unwrap()),
        serializer: options,
    })
    .unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, r#"<svg><path d="m 1 1 h 1 v 1 h -1 z"/></svg>"#);
}

#[test]
fn count_closed_sub_paths() {
    use std::fs;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("count.txt");

    normalize_path(PathCmd {
        input: "M 0 0 L 1 0 L 0 0 M 5 5 H 6 H 5\n".to_string(),
        output: Box::new(fs::File::create(&path).unwrap()),
        serializer: SerializerOptions::DEFAULT,
        count: true,
    })
    .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "2\n");
}
