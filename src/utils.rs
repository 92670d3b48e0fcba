/// Keeps the first few characters of a token so it can be recognised in logs.
pub fn mask_secret(secret: &str) -> String {
    const VISIBLE: usize = 4;

    if secret.chars().count() <= VISIBLE * 2 {
        return "***".to_string();
    }
    let head: String = secret.chars().take(VISIBLE).collect();
    format!("{head}***")
}
