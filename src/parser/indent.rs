//! Turns the decoration in front of a diagram entry into a nesting level.

/// Columns covered by one level of box-drawing indentation (`│   `).
const CELL_WIDTH: usize = 4;
/// Columns covered by one level of plain space indentation.
const SPACE_WIDTH: usize = 2;

/// Leading decoration of one line, split from the entry text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Indent<'a> {
    pub level: usize,
    pub rest: &'a str,
}

fn is_space(ch: char) -> bool {
    ch == ' ' || ch == '\u{a0}'
}

fn is_vertical(ch: char) -> bool {
    matches!(ch, '│' | '|')
}

fn is_dash(ch: char) -> bool {
    matches!(ch, '─' | '-')
}

/// Box connectors stand on their own. ASCII ones only count when a dash
/// follows, so an entry such as `+page.svelte` keeps its name and a bare `|`
/// stays a vertical.
fn is_connector(ch: char, next: Option<char>) -> bool {
    match ch {
        '├' | '└' => true,
        '|' | '`' | '+' | '\\' => next.is_some_and(is_dash),
        _ => false,
    }
}

/// How bare leading spaces are read.
///
/// `tree` output indents the children of a last-branch entry with four blank
/// columns per level instead of `│   `, so a diagram with a connector in
/// column 0 reads every run of spaces in cell units. Anything else is plain
/// two-space indentation until a glyph appears on the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum IndentStyle {
    #[default]
    Plain,
    Boxed,
}

impl IndentStyle {
    pub(crate) fn detect(text: &str) -> Self {
        let boxed = text.lines().any(|line| {
            let mut chars = line.chars();
            match chars.next() {
                Some(first) => is_connector(first, chars.next()),
                None => false,
            }
        });
        if boxed {
            IndentStyle::Boxed
        } else {
            IndentStyle::Plain
        }
    }
}

fn spaces_to_levels(spaces: usize, in_cells: bool) -> usize {
    if in_cells {
        spaces.div_ceil(CELL_WIDTH)
    } else {
        spaces / SPACE_WIDTH
    }
}

/// Measures `line` on its own; only the document-wide `style` is shared
/// between lines.
pub(crate) fn measure(line: &str, style: IndentStyle) -> Indent<'_> {
    let mut level = 0;
    let mut spaces = 0;
    let mut in_cells = style == IndentStyle::Boxed;
    let mut chars = line.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        let next = chars.peek().map(|&(_, c)| c);

        if is_space(ch) {
            spaces += 1;
        } else if ch == '\t' {
            level += spaces_to_levels(spaces, in_cells) + 1;
            spaces = 0;
        } else if is_connector(ch, next) {
            level += spaces_to_levels(spaces, in_cells);
            while chars.next_if(|&(_, c)| is_dash(c)).is_some() {}
            let rest = match chars.peek() {
                Some(&(start, _)) => line[start..].trim_start(),
                None => "",
            };
            return Indent { level, rest };
        } else if is_vertical(ch) {
            level += spaces_to_levels(spaces, in_cells) + 1;
            spaces = 0;
            in_cells = true;
            // the rest of the `│   ` cell
            for _ in 1..CELL_WIDTH {
                if chars.next_if(|&(_, c)| is_space(c)).is_none() {
                    break;
                }
            }
        } else {
            level += spaces_to_levels(spaces, in_cells);
            return Indent {
                level,
                rest: &line[idx..],
            };
        }
    }

    Indent {
        level: level + spaces_to_levels(spaces, in_cells),
        rest: "",
    }
}
