use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub status: &'static str,
    pub result: String,
}

impl AnalyzeResponse {
    pub fn success(result: String) -> Self {
        Self {
            status: "success",
            result,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
