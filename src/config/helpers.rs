use crate::lexer::{self, LineKind};

/// Find the source line that last assigned the dotted `key`.
///
/// Tracks `name : ([` scopes to build full paths; the anonymous root blocks
/// contribute no segment. Returns the 1-based line and its trimmed text.
pub(super) fn find_config_line(key: &str, raw_content: &str) -> Option<(usize, String)> {
    let mut scope_stack: Vec<Option<&str>> = Vec::new();
    let mut found = None;

    for (idx, line) in lexer::read_all_lines(raw_content).into_iter().enumerate() {
        let trimmed = line.trim();

        match lexer::classify(trimmed) {
            LineKind::DictOpen => scope_stack.push(None),
            LineKind::DictClose => {
                scope_stack.pop();
            }
            LineKind::Other => {
                let Some((line_key, value)) = lexer::split_entry(trimmed) else {
                    continue;
                };

                let mut path: Vec<&str> = scope_stack.iter().flatten().copied().collect();
                path.push(line_key);
                if path.join(".") == key {
                    found = Some((idx + 1, trimmed.to_string()));
                }

                if value == lexer::DICT_OPEN {
                    scope_stack.push(Some(line_key));
                }
            }
            LineKind::Skip | LineKind::Const => {}
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "const x = 1\n([\n  port : 80,\n  server : ([\n    port : 8080\n  ]),\n  port : 81\n])";

    #[test]
    fn finds_last_assignment_of_path() {
        assert_eq!(find_config_line("port", SOURCE), Some((7, "port : 81".to_string())));
        assert_eq!(find_config_line("server.port", SOURCE), Some((5, "port : 8080".to_string())));
        assert_eq!(find_config_line("server", SOURCE), Some((4, "server : ([".to_string())));
    }

    #[test]
    fn unknown_path_has_no_line() {
        assert_eq!(find_config_line("x", SOURCE), None);
        assert_eq!(find_config_line("server.host", SOURCE), None);
    }
}
