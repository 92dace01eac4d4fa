// src/core/collate.rs
//
// Arabic-first ordering for option lists. Close to what a browser's
// `localeCompare(_, "ar")` gives for the names found in the data files:
// - Arabic letters sort before letters of any other script
// - hamza-carrying alef forms sort with bare alef
// - alef maqsura sorts with yeh, teh marbuta with teh
// - harakat and tatweel are ignored
// - Latin text is compared case-insensitively
// Ties on the folded key fall back to the raw strings so the order is total.

use std::cmp::Ordering;

// Weight bands: spaces, punctuation and digits, then Arabic letters, then
// every other letter.
const ARABIC_BAND: u32 = 0x11_0000;
const OTHER_BAND: u32 = 0x22_0000;

fn fold_char(ch: char) -> Option<char> {
    match ch {
        // Harakat, shadda, sukun, superscript alef
        '\u{064B}'..='\u{065F}' | '\u{0670}' => None,
        // Tatweel
        '\u{0640}' => None,
        'أ' | 'إ' | 'آ' | 'ٱ' => Some('ا'),
        'ى' => Some('ي'),
        'ة' => Some('ت'),
        // Arabic-Indic digits with ASCII ones
        '\u{0660}'..='\u{0669}' => char::from_digit(ch as u32 - 0x0660, 10),
        _ => Some(ch),
    }
}

fn is_arabic(ch: char) -> bool {
    matches!(ch,
        '\u{0600}'..='\u{06FF}'
        | '\u{0750}'..='\u{077F}'
        | '\u{08A0}'..='\u{08FF}'
        | '\u{FB50}'..='\u{FDFF}'
        | '\u{FE70}'..='\u{FEFF}')
}

fn weight(ch: char) -> u32 {
    match ch {
        c if !c.is_alphabetic() => c as u32,
        c if is_arabic(c) => ARABIC_BAND + c as u32,
        c => OTHER_BAND + c as u32,
    }
}

/// Primary collation key: folded characters as script-banded weights.
pub fn sort_key(s: &str) -> Vec<u32> {
    s.trim()
        .chars()
        .filter_map(fold_char)
        .flat_map(char::to_lowercase)
        .map(weight)
        .collect()
}

pub fn compare(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b)).then_with(|| a.cmp(b))
}

/// Sort in place and drop exact duplicates.
pub fn sort_dedup(items: &mut Vec<String>) {
    // Cache keys; option lists are re-sorted on every category change.
    let mut keyed: Vec<(Vec<u32>, String)> = items.drain(..).map(|s| (sort_key(&s), s)).collect();
    keyed.sort_by(|(ka, a), (kb, b)| ka.cmp(kb).then_with(|| a.cmp(b)));
    keyed.dedup_by(|(_, a), (_, b)| a == b);
    items.extend(keyed.into_iter().map(|(_, s)| s));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alef_variants_sort_together() {
        let mut v = vec![s!("باب الشعرية"), s!("إمبابة"), s!("الزمالك"), s!("أكتوبر")];
        sort_dedup(&mut v);
        assert_eq!(v, vec!["أكتوبر", "الزمالك", "إمبابة", "باب الشعرية"]);
    }

    #[test]
    fn latin_is_case_insensitive_and_total() {
        let mut v = vec![s!("giza"), s!("Cairo"), s!("Giza"), s!("cairo"), s!("Giza")];
        sort_dedup(&mut v);
        assert_eq!(v, vec!["Cairo", "cairo", "Giza", "giza"]);
    }

    #[test]
    fn arabic_letters_sort_before_latin() {
        let mut v = vec![s!("Giza"), s!("الجيزة"), s!("Maadi"), s!("المعادي")];
        sort_dedup(&mut v);
        assert_eq!(v, vec!["الجيزة", "المعادي", "Giza", "Maadi"]);
        // Digits and spaces still come before any letter.
        assert!(compare("6 اكتوبر", "اكتوبر").is_lt());
        assert!(compare("ي", "a").is_lt());
    }

    #[test]
    fn teh_marbuta_sorts_with_teh() {
        assert_eq!(sort_key("قرية"), sort_key("قريت"));
        assert_ne!(sort_key("قرية"), sort_key("قريه"));
        let mut v = vec![s!("شبرا"), s!("شبة")];
        sort_dedup(&mut v);
        assert_eq!(v, vec!["شبة", "شبرا"]);
    }

    #[test]
    fn diacritics_ignored() {
        assert_eq!(sort_key("مُحَمَّد"), sort_key("محمد"));
        assert_eq!(compare("مدينة نصر", "مَدِينَة نصر"), "مدينة نصر".cmp("مَدِينَة نصر"));
        assert_eq!(compare("٦ أكتوبر", "6 اكتوبر"), "٦ أكتوبر".cmp("6 اكتوبر"));
    }
}
