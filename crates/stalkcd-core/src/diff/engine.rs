//! Tokenizer and Myers shortest-edit-script diff.

use crate::diff::model::DiffSegment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenClass {
    Word,
    Single,
    Space,
    Punct,
}

fn class_of(c: char) -> TokenClass {
    match c {
        '(' | ')' | '[' | ']' | '{' | '}' | '\'' | '"' | '\n' | '\r' => TokenClass::Single,
        c if c.is_alphanumeric() || c == '_' => TokenClass::Word,
        c if c.is_whitespace() => TokenClass::Space,
        _ => TokenClass::Punct,
    }
}

/// Split text into diff tokens.
///
/// Words, horizontal whitespace and other punctuation form runs. Brackets,
/// quotes and line breaks are tokens of their own. Concatenating the tokens
/// gives back the input.
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut current: Option<TokenClass> = None;

    for (i, c) in text.char_indices() {
        let class = class_of(c);
        match current {
            Some(prev) if prev == class && class != TokenClass::Single => {}
            Some(_) => {
                tokens.push(&text[start..i]);
                start = i;
            }
            None => {}
        }
        current = Some(class);
    }
    if start < text.len() {
        tokens.push(&text[start..]);
    }
    tokens
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edit {
    Keep,
    Delete,
    Insert,
}

/// Edit distance past which the search gives up and the differing middle is
/// reported as one removal plus one addition. Bounds the trace to roughly a
/// million entries.
const MAX_EDIT_DISTANCE: usize = 1024;

/// Myers O(ND) edit script turning `a` into `b`, or `None` when the two
/// differ by more than `limit` edits.
///
/// Each round keeps only the diagonal window it can reach, so the trace
/// grows with D² rather than D·(N+M).
fn shortest_edit(a: &[&str], b: &[&str], limit: usize) -> Option<Vec<Edit>> {
    let n = a.len() as isize;
    let m = b.len() as isize;
    let max = n + m;
    let bound = max.min(limit as isize);
    let offset = max + 1;
    let mut v = vec![0isize; (2 * max + 3) as usize];
    let mut trace: Vec<Vec<isize>> = Vec::new();
    let mut reached = false;

    'search: for d in 0..=bound {
        trace.push(v[(offset - d) as usize..=(offset + d) as usize].to_vec());
        let mut k = -d;
        while k <= d {
            let idx = (k + offset) as usize;
            let mut x = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
                v[idx + 1]
            } else {
                v[idx - 1] + 1
            };
            let mut y = x - k;
            while x < n && y < m && a[x as usize] == b[y as usize] {
                x += 1;
                y += 1;
            }
            v[idx] = x;
            if x >= n && y >= m {
                reached = true;
                break 'search;
            }
            k += 2;
        }
    }
    if !reached {
        return None;
    }

    let mut edits = Vec::new();
    let (mut x, mut y) = (n, m);
    for d in (0..trace.len()).rev() {
        if d == 0 {
            while x > 0 && y > 0 {
                edits.push(Edit::Keep);
                x -= 1;
                y -= 1;
            }
            break;
        }
        let d = d as isize;
        let window = &trace[d as usize];
        let at = |k: isize| window[(k + d) as usize];

        let k = x - y;
        let prev_k = if k == -d || (k != d && at(k - 1) < at(k + 1)) {
            k + 1
        } else {
            k - 1
        };
        let prev_x = at(prev_k);
        let prev_y = prev_x - prev_k;

        while x > prev_x && y > prev_y {
            edits.push(Edit::Keep);
            x -= 1;
            y -= 1;
        }
        edits.push(if x == prev_x { Edit::Insert } else { Edit::Delete });
        x = prev_x;
        y = prev_y;
    }
    edits.reverse();
    Some(edits)
}

/// Edit script with the common prefix and suffix kept outside the search.
fn edit_script(a: &[&str], b: &[&str], limit: usize) -> Vec<Edit> {
    let prefix = a.iter().zip(b).take_while(|(x, y)| x == y).count();
    let suffix = a[prefix..]
        .iter()
        .rev()
        .zip(b[prefix..].iter().rev())
        .take_while(|(x, y)| x == y)
        .count();
    let middle_a = &a[prefix..a.len() - suffix];
    let middle_b = &b[prefix..b.len() - suffix];

    let mut edits = vec![Edit::Keep; prefix];
    match shortest_edit(middle_a, middle_b, limit) {
        Some(middle) => edits.extend(middle),
        None => {
            tracing::debug!(
                removed_tokens = middle_a.len() as u64,
                added_tokens = middle_b.len() as u64,
                limit = limit as u64,
                "edit distance limit reached"
            );
            edits.extend(std::iter::repeat(Edit::Delete).take(middle_a.len()));
            edits.extend(std::iter::repeat(Edit::Insert).take(middle_b.len()));
        }
    }
    edits.extend(std::iter::repeat(Edit::Keep).take(suffix));
    edits
}

/// Word-level diff of two texts.
///
/// Equal tokens coalesce into one `Unchanged` segment. Within a change
/// region every removed token is emitted as one `Removed` segment, followed
/// by one `Added` segment for the inserted tokens. Empty segments are never
/// emitted. Texts that differ by more than `MAX_EDIT_DISTANCE` token edits
/// keep their common prefix and suffix, and everything between becomes a
/// single change region.
pub fn diff_words(old: &str, new: &str) -> Vec<DiffSegment> {
    diff_words_within(old, new, MAX_EDIT_DISTANCE)
}

fn diff_words_within(old: &str, new: &str, limit: usize) -> Vec<DiffSegment> {
    let a = tokenize(old);
    let b = tokenize(new);
    let edits = edit_script(&a, &b, limit);

    let mut segments = Vec::new();
    let mut unchanged = String::new();
    let mut removed = String::new();
    let mut added = String::new();
    let (mut i, mut j) = (0usize, 0usize);

    let flush_changes = |segments: &mut Vec<DiffSegment>, removed: &mut String, added: &mut String| {
        if !removed.is_empty() {
            segments.push(DiffSegment::Removed(std::mem::take(removed)));
        }
        if !added.is_empty() {
            segments.push(DiffSegment::Added(std::mem::take(added)));
        }
    };

    for edit in edits {
        match edit {
            Edit::Keep => {
                flush_changes(&mut segments, &mut removed, &mut added);
                unchanged.push_str(a[i]);
                i += 1;
                j += 1;
            }
            Edit::Delete => {
                if !unchanged.is_empty() {
                    segments.push(DiffSegment::Unchanged(std::mem::take(&mut unchanged)));
                }
                removed.push_str(a[i]);
                i += 1;
            }
            Edit::Insert => {
                if !unchanged.is_empty() {
                    segments.push(DiffSegment::Unchanged(std::mem::take(&mut unchanged)));
                }
                added.push_str(b[j]);
                j += 1;
            }
        }
    }
    flush_changes(&mut segments, &mut removed, &mut added);
    if !unchanged.is_empty() {
        segments.push(DiffSegment::Unchanged(unchanged));
    }
    segments
}
