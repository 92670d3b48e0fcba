use crate::domain::Homework;
use crate::verdict::StatusVerdictTable;

/// Turns a homework record into the text sent to the chat.
pub fn compose(homework: &Homework) -> String {
    let Some(name) = homework.homework_name.as_deref() else {
        return "Название: None".to_string();
    };

    let status = homework.status.as_deref();
    let Some(verdict) = status.and_then(|s| StatusVerdictTable.verdict_for(s)) else {
        return format!("Статус: {}", status.unwrap_or("None"));
    };

    let mut message = format!("У вас проверили работу \"{name}\"!\n\n{verdict}");
    if let Some(comment) = homework
        .reviewer_comment
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
    {
        message.push_str(&format!("\n\nКомментарий ревьюера: {comment}"));
    }
    message
}

/// Text relayed to the chat when a polling cycle fails.
pub fn failure(error: &dyn std::fmt::Display) -> String {
    format!("Бот упал с ошибкой: {error}")
}

#[cfg(test)]
mod tests {
    use super::{compose, failure};
    use crate::domain::Homework;

    fn homework(name: Option<&str>, status: Option<&str>) -> Homework {
        Homework {
            homework_name: name.map(str::to_string),
            status: status.map(str::to_string),
            ..Homework::default()
        }
    }

    #[test]
    fn approved_work() {
        let message = compose(&homework(Some("hw_bot.zip"), Some("approved")));
        assert_eq!(
            message,
            "У вас проверили работу \"hw_bot.zip\"!\n\nРевьюеру всё понравилось, работа зачтена!"
        );
    }

    #[test]
    fn rejected_work() {
        let message = compose(&homework(Some("hw_bot.zip"), Some("rejected")));
        assert_eq!(
            message,
            "У вас проверили работу \"hw_bot.zip\"!\n\nК сожалению, в работе нашлись ошибки."
        );
    }

    #[test]
    fn unknown_status_reports_raw_value() {
        let message = compose(&homework(Some("hw_bot.zip"), Some("reviewing")));
        assert_eq!(message, "Статус: reviewing");
    }

    #[test]
    fn missing_status_is_reported() {
        let message = compose(&homework(Some("hw_bot.zip"), None));
        assert_eq!(message, "Статус: None");
    }

    #[test]
    fn missing_name_wins_over_status() {
        let message = compose(&homework(None, Some("approved")));
        assert_eq!(message, "Название: None");
    }

    #[test]
    fn appends_reviewer_comment() {
        let mut hw = homework(Some("hw_bot.zip"), Some("rejected"));
        hw.reviewer_comment = Some("  Поправь импорты ".to_string());
        let message = compose(&hw);
        assert!(message.ends_with("\n\nКомментарий ревьюера: Поправь импорты"));
    }

    #[test]
    fn blank_comment_is_skipped() {
        let mut hw = homework(Some("hw_bot.zip"), Some("approved"));
        hw.reviewer_comment = Some("   ".to_string());
        assert!(!compose(&hw).contains("Комментарий"));
    }

    #[test]
    fn failure_includes_error_text() {
        assert_eq!(failure(&"connection refused"), "Бот упал с ошибкой: connection refused");
    }
}
