//! Tab-aware conversion between character offsets and visual columns.
//!
//! Every character is one column wide except `\t`, which advances to the
//! next multiple of the tab width.

/// Column of the next tab stop after `col`
pub fn next_tab_col(col: usize, tab_width: usize) -> usize {
    let tab_width = tab_width.max(1);
    (col / tab_width + 1) * tab_width
}

/// Round `col` to the nearest tab stop (halfway rounds up)
pub fn round_tab_col(col: usize, tab_width: usize) -> usize {
    let tab_width = tab_width.max(1);
    (col + tab_width / 2) / tab_width * tab_width
}

fn advance(col: usize, ch: char, tab_width: usize) -> usize {
    if ch == '\t' {
        next_tab_col(col, tab_width)
    } else {
        col + 1
    }
}

/// Visual column of `offset` in `line`. Offsets past the end stop at the line end.
pub fn offset_to_col(line: &str, offset: usize, tab_width: usize) -> usize {
    line.chars()
        .take(offset)
        .fold(0, |col, ch| advance(col, ch, tab_width))
}

/// Offset whose visual column is closest to `col`.
///
/// When a wide character (a tab) straddles `col`, the result is the side of
/// that character nearer to `col`; exactly halfway resolves after it.
pub fn col_to_offset(line: &str, col: usize, tab_width: usize) -> usize {
    let mut offset = 0;
    let mut current = 0;
    let mut last = 0;

    for ch in line.chars() {
        if current >= col {
            break;
        }
        last = current;
        current = advance(current, ch, tab_width);
        offset += 1;
    }

    if current > col {
        let overflow = current - col;
        let width = current - last;
        if overflow * 2 > width {
            offset -= 1;
        }
    }

    offset
}
