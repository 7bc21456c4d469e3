//! Output formatting utilities

use crate::domain::{DateStyle, Diary};

const SHORT_ID_LEN: usize = 8;

/// Leading part of an id, enough to address the entry in most diaries
pub fn short_id(diary: &Diary) -> &str {
    let id = diary.id.as_str();
    id.char_indices()
        .nth(SHORT_ID_LEN)
        .map_or(id, |(end, _)| &id[..end])
}

fn star_mark(diary: &Diary) -> char {
    if diary.is_star {
        '★'
    } else {
        ' '
    }
}

/// One line per entry: date, star, title, short id
pub fn format_diary_list(diaries: &[&Diary], style: DateStyle) -> String {
    if diaries.is_empty() {
        return "No diary entries found".to_string();
    }

    let mut output = String::new();
    for diary in diaries {
        output.push_str(&format!(
            "{}  {}  {}  [{}]\n",
            style.format(&diary.date),
            star_mark(diary),
            diary.title,
            short_id(diary)
        ));
    }
    output
}

/// Full entry as shown by the detail view
pub fn format_diary_detail(diary: &Diary, style: DateStyle) -> String {
    format!(
        "{} {}\n{}\nid: {}\n\n{}\n",
        star_mark(diary),
        diary.title,
        style.format(&diary.date),
        diary.id,
        diary.contents
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DiaryId;
    use chrono::{TimeZone, Utc};

    fn diary(id: &str, title: &str, day: u32, is_star: bool) -> Diary {
        Diary {
            id: DiaryId::from(id),
            title: title.to_string(),
            contents: "Went for a walk.".to_string(),
            date: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
            is_star,
        }
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(
            format_diary_list(&[], DateStyle::Iso),
            "No diary entries found"
        );
    }

    #[test]
    fn test_format_list() {
        let b = diary("bbbbbbbb-1234", "B", 12, true);
        let a = diary("aaaaaaaa-5678", "A", 10, false);

        let output = format_diary_list(&[&b, &a], DateStyle::Iso);
        assert_eq!(
            output,
            "2024-01-12  ★  B  [bbbbbbbb]\n2024-01-10     A  [aaaaaaaa]\n"
        );
    }

    #[test]
    fn test_format_list_korean_dates() {
        let b = diary("bbbbbbbb-1234", "B", 12, false);
        let output = format_diary_list(&[&b], DateStyle::Korean);
        assert!(output.starts_with("24년 01월 12일(금)"));
    }

    #[test]
    fn test_short_id_of_short_ids() {
        let d = diary("abc", "A", 10, false);
        assert_eq!(short_id(&d), "abc");
    }

    #[test]
    fn test_format_detail() {
        let d = diary("bbbbbbbb-1234", "B", 12, true);
        let output = format_diary_detail(&d, DateStyle::Iso);

        assert!(output.starts_with("★ B\n2024-01-12\n"));
        assert!(output.contains("id: bbbbbbbb-1234"));
        assert!(output.contains("Went for a walk."));
    }
}
