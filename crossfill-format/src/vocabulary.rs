use std::collections::BTreeSet;

use nom::character::complete::alpha1;
use nom::combinator::all_consuming;
use nom::IResult;

use crate::FormatError;

/// Parse a vocabulary file.
///
/// Every non-blank line holds one word made of ASCII letters. Words are uppercased, and the
/// result is sorted and free of duplicates.
pub fn parse_vocabulary(source: &str) -> Result<Vec<String>, FormatError> {
    let mut words = BTreeSet::new();

    for (idx, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (_, word) = word(line).map_err(|_| FormatError::InvalidWord {
            line: idx + 1,
            word: line.to_owned(),
        })?;

        let _ = words.insert(word.to_ascii_uppercase());
    }

    Ok(words.into_iter().collect())
}

fn word(input: &str) -> IResult<&str, &str> {
    all_consuming(alpha1)(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_uppercased_sorted_and_deduplicated() {
        let words = parse_vocabulary("dog\ncat\nCat\n  owl \n\ndog\n").expect("valid vocabulary");

        assert_eq!(words, vec!["CAT", "DOG", "OWL"]);
    }

    #[test]
    fn empty_vocabulary_is_allowed() {
        assert_eq!(parse_vocabulary("\n\n"), Ok(vec![]));
    }

    #[test]
    fn non_alphabetic_words_are_rejected() {
        assert_eq!(
            parse_vocabulary("cat\nice cream\n"),
            Err(FormatError::InvalidWord {
                line: 2,
                word: "ice cream".to_owned()
            })
        );
        assert!(parse_vocabulary("r2d2\n").is_err());
    }
}
