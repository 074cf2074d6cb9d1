//! String rewrites applied to a raw locator before URI decomposition.

/// Host token substituted when a locator names no host (`git:///path`).
pub const GLOBAL_PATH_HOST: &str = "__global__";

/// Converts every `\` to `/` and collapses runs of separators.
///
/// Right after `scheme:` up to three slashes are kept, so the authority
/// marker and the empty-host form `scheme:///` survive. Collapsing stops at
/// the first `?`, leaving query values untouched.
pub fn normalize_separators(raw: &str) -> String {
    const MAX_LEAD_SLASHES: usize = 3;

    let unified = raw.replace('\\', "/");

    // (end of `scheme:`, end of the slash run that follows it)
    let (scheme_end, lead_end) = match unified.find(':') {
        Some(colon) => {
            let after = &unified[colon + 1..];
            let run = after.len() - after.trim_start_matches('/').len();
            (colon + 1, colon + 1 + run)
        }
        None => (0, 0),
    };
    let query_start = unified[lead_end..]
        .find('?')
        .map(|i| lead_end + i)
        .unwrap_or(unified.len());

    let mut out = String::with_capacity(unified.len());
    out.push_str(&unified[..scheme_end]);
    let lead_slashes = (lead_end - scheme_end).min(MAX_LEAD_SLASHES);
    out.extend(std::iter::repeat('/').take(lead_slashes));
    let mut prev_slash = lead_slashes > 0;
    for c in unified[lead_end..query_start].chars() {
        if c == '/' {
            if prev_slash {
                continue;
            }
            prev_slash = true;
        } else {
            prev_slash = false;
        }
        out.push(c);
    }
    out.push_str(&unified[query_start..]);
    out
}

/// Moves the first fragment token found mid-path to the end of the string.
///
/// A fragment token is `#` followed by one or more non-`/` characters, with
/// at least one character before the `#`. Directory walkers produce
/// `git://h/repo#rev/file.txt`; this yields `git://h/repo/file.txt#rev`.
/// Only the first token is relocated.
pub fn relocate_fragment(s: &str) -> String {
    for (hash, _) in s.match_indices('#') {
        if hash == 0 {
            continue;
        }
        let rest = &s[hash + 1..];
        let run = rest.find('/').unwrap_or(rest.len());
        if run == 0 {
            continue;
        }
        let token_end = hash + 1 + run;
        let mut out = String::with_capacity(s.len());
        out.push_str(&s[..hash]);
        out.push_str(&s[token_end..]);
        out.push_str(&s[hash..token_end]);
        return out;
    }
    s.to_string()
}

/// Rewrites `scheme:///` to `scheme://__global__/`.
pub fn rewrite_global_host(s: &str, scheme: &str) -> String {
    let prefix_len = scheme.len() + 4;
    let bytes = s.as_bytes();
    let matches = bytes.len() >= prefix_len
        && bytes[..scheme.len()].eq_ignore_ascii_case(scheme.as_bytes())
        && &bytes[scheme.len()..prefix_len] == b":///";
    if !matches {
        return s.to_string();
    }
    format!(
        "{}://{}/{}",
        &s[..scheme.len()],
        GLOBAL_PATH_HOST,
        &s[prefix_len..]
    )
}

/// Strips the leading slash from `/C:/...` style paths.
pub fn strip_drive_letter_slash(path: &str) -> Option<&str> {
    let bytes = path.as_bytes();
    let is_drive = bytes.len() > 3
        && bytes[0] == b'/'
        && (bytes[1].is_ascii_alphanumeric() || bytes[1] == b'_')
        && bytes[2] == b':';
    is_drive.then(|| path.trim_start_matches('/'))
}
