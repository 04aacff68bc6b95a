#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    status: &'static str,
    message: String,
}

impl HealthStatus {
    pub fn ok(service_name: &str) -> Self {
        Self {
            status: "ok",
            message: format!("{service_name} API is running"),
        }
    }

    pub fn status(&self) -> &str {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
