use bytes::Bytes;

use crate::logos::errors::LogoError;

pub async fn get_bytes(url: &str, client: &reqwest::Client) -> Result<Bytes, LogoError> {
    let res = match client.get(url).send().await {
        Ok(res) => res,
        Err(e) => {
            tracing::error!(%e);
            return Err(LogoError::Fetch("Failed to get url response.".to_string()));
        }
    };

    let status = res.status();
    if !status.is_success() {
        tracing::error!(%status, url, "image download rejected");
        return Err(LogoError::Fetch(
            ["Image download failed: status=", status.as_str()].concat(),
        ));
    }

    match res.bytes().await {
        Ok(bytes) => Ok(bytes),
        Err(e) => {
            tracing::error!(%e);
            Err(LogoError::Fetch(
                "Failed to get bytes from response.".to_string(),
            ))
        }
    }
}
