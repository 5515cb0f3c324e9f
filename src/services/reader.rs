/// Sentences per paragraph when the summary has no blank-line
/// structure of its own.
const SENTENCES_PER_PARAGRAPH: usize = 4;

/// Splits a summary into display paragraphs.
///
/// Blank-line boundaries win when present; otherwise the text is cut
/// into groups of 4 sentences using the period-space-capital
/// heuristic.
pub fn segment_summary(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n");

    let blank_line_paragraphs: Vec<String> = normalized
        .split("\n\n")
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(|p| p.to_string())
        .collect();

    if blank_line_paragraphs.len() > 1 {
        return blank_line_paragraphs;
    }

    let flat = normalized.trim();
    if flat.is_empty() {
        return Vec::new();
    }

    group_sentences(&split_sentences(flat))
}

/// Sentence boundary: a period followed by whitespace followed by a
/// capital letter. Deliberately simple; summaries are edited prose.
fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut start = 0;

    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '.' && i + 1 < chars.len() && chars[i + 1] == ' ' {
            let mut next = i + 1;
            while next < chars.len() && chars[next] == ' ' {
                next += 1;
            }
            if next < chars.len() && chars[next].is_uppercase() {
                let sentence: String = chars[start..=i].iter().collect();
                let sentence = sentence.trim().to_string();
                if !sentence.is_empty() {
                    sentences.push(sentence);
                }
                start = next;
                i = next;
                continue;
            }
        }
        i += 1;
    }

    let tail: String = chars[start..].iter().collect();
    let tail = tail.trim().to_string();
    if !tail.is_empty() {
        sentences.push(tail);
    }

    sentences
}

fn group_sentences(sentences: &[String]) -> Vec<String> {
    sentences
        .chunks(SENTENCES_PER_PARAGRAPH)
        .map(|chunk| chunk.join(" "))
        .collect()
}
