//! Decoding policy sent with every generation request

use serde::{Deserialize, Serialize};

/// How the endpoint picks tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodingMethod {
    #[default]
    Greedy,
    Sample,
}

impl DecodingMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecodingMethod::Greedy => "greedy",
            DecodingMethod::Sample => "sample",
        }
    }
}

impl std::fmt::Display for DecodingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DecodingMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "greedy" => Ok(DecodingMethod::Greedy),
            "sample" => Ok(DecodingMethod::Sample),
            other => Err(format!(
                "unknown decoding method '{}' (expected greedy or sample)",
                other
            )),
        }
    }
}

/// Generation parameters (Value Object)
///
/// Defaults: greedy decoding, temperature 0.7, 10 to 2048 new tokens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecodingParams {
    pub decoding_method: DecodingMethod,
    pub temperature: f32,
    pub min_new_tokens: u32,
    pub max_new_tokens: u32,
}

impl DecodingParams {
    pub const DEFAULT_TEMPERATURE: f32 = 0.7;
    pub const DEFAULT_MIN_NEW_TOKENS: u32 = 10;
    pub const DEFAULT_MAX_NEW_TOKENS: u32 = 2048;

    /// Problems that would make the endpoint reject the request.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if !(0.0..=2.0).contains(&self.temperature) {
            problems.push(format!(
                "temperature must be within 0.0..=2.0, got {}",
                self.temperature
            ));
        }
        if self.max_new_tokens == 0 {
            problems.push("max_new_tokens must be greater than zero".to_string());
        }
        if self.min_new_tokens > self.max_new_tokens {
            problems.push(format!(
                "min_new_tokens ({}) exceeds max_new_tokens ({})",
                self.min_new_tokens, self.max_new_tokens
            ));
        }
        problems
    }
}

impl Default for DecodingParams {
    fn default() -> Self {
        Self {
            decoding_method: DecodingMethod::Greedy,
            temperature: Self::DEFAULT_TEMPERATURE,
            min_new_tokens: Self::DEFAULT_MIN_NEW_TOKENS,
            max_new_tokens: Self::DEFAULT_MAX_NEW_TOKENS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = DecodingParams::default();
        assert_eq!(params.decoding_method, DecodingMethod::Greedy);
        assert_eq!(params.temperature, 0.7);
        assert_eq!(params.min_new_tokens, 10);
        assert_eq!(params.max_new_tokens, 2048);
        assert!(params.problems().is_empty());
    }

    #[test]
    fn test_problems_detected() {
        let params = DecodingParams {
            decoding_method: DecodingMethod::Sample,
            temperature: 3.5,
            min_new_tokens: 500,
            max_new_tokens: 100,
        };
        assert_eq!(params.problems().len(), 2);
    }

    #[test]
    fn test_decoding_method_parse() {
        assert_eq!("GREEDY".parse(), Ok(DecodingMethod::Greedy));
        assert_eq!("sample".parse(), Ok(DecodingMethod::Sample));
        assert!("beam".parse::<DecodingMethod>().is_err());
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&DecodingMethod::Greedy).unwrap(),
            "\"greedy\""
        );
    }
}
