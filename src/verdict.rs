/// Review statuses the bot knows how to describe.
#[derive(Debug, Default, Clone, Copy)]
pub struct StatusVerdictTable;

impl StatusVerdictTable {
    pub fn verdict_for(&self, status: &str) -> Option<&'static str> {
        match status {
            "rejected" => Some("К сожалению, в работе нашлись ошибки."),
            "approved" => Some("Ревьюеру всё понравилось, работа зачтена!"),
            _ => None,
        }
    }
}
