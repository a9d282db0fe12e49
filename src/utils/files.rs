use std::path::Path;

pub async fn read_text_file(path: &str) -> std::io::Result<String> {
    tokio::fs::read_to_string(path).await.map_err(|e| {
        std::io::Error::new(e.kind(), format!("Failed to read file {}: {}", path, e))
    })
}

pub async fn write_text_file(path: &str, content: &str) -> std::io::Result<()> {
    tokio::fs::write(path, content).await.map_err(|e| {
        std::io::Error::new(e.kind(), format!("Failed to write file {}: {}", path, e))
    })
}

pub fn file_exists(path: &str) -> bool {
    Path::new(path).exists()
}
