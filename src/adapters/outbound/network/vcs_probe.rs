use crate::ports::outbound::VcsProbe;
use crate::sbom_engine::domain::ReachabilityOutcome;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

/// HttpVcsProbe adapter for checking repository URLs over HTTP(S)
///
/// Sends a HEAD request and falls back to GET when the server does not
/// support HEAD. Redirects are followed by the client. SSH and `git://`
/// URLs cannot be probed over HTTP and are reported as skipped.
pub struct HttpVcsProbe {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpVcsProbe {
    /// Creates a probe whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self> {
        let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, timeout })
    }

    async fn request(&self, method: reqwest::Method, url: &str) -> ReachabilityOutcome {
        match self.client.request(method, url).send().await {
            Ok(response) => classify_status(response.status()),
            Err(e) if e.is_timeout() => ReachabilityOutcome::TimedOut {
                after: self.timeout,
            },
            Err(e) => ReachabilityOutcome::Unreachable {
                reason: e.to_string(),
            },
        }
    }
}

#[async_trait]
impl VcsProbe for HttpVcsProbe {
    async fn probe(&self, url: &str) -> ReachabilityOutcome {
        let target = match normalize_url(url) {
            Ok(target) => target,
            Err(reason) => return ReachabilityOutcome::Skipped { reason },
        };

        let outcome = self.request(reqwest::Method::HEAD, &target).await;
        let outcome = match outcome {
            ReachabilityOutcome::Unreachable { .. } => {
                tracing::debug!(url = %target, "HEAD failed, retrying with GET");
                self.request(reqwest::Method::GET, &target).await
            }
            other => other,
        };

        if let ReachabilityOutcome::Unreachable { reason } = &outcome {
            tracing::debug!(url = %target, %reason, "VCS repository unreachable");
        }
        outcome
    }
}

fn classify_status(status: StatusCode) -> ReachabilityOutcome {
    if status.is_success() || status.is_redirection() {
        ReachabilityOutcome::Reachable
    } else {
        ReachabilityOutcome::Unreachable {
            reason: format!("HTTP {}", status),
        }
    }
}

/// Turns a VCS reference URL into an HTTP(S) URL that can be probed.
///
/// `git+https://host/repo.git` becomes `https://host/repo`. Returns the reason
/// the URL is skipped when it cannot be probed over HTTP.
fn normalize_url(url: &str) -> std::result::Result<String, String> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err("empty URL".to_string());
    }
    if trimmed.starts_with("git@") || trimmed.starts_with("ssh://") || trimmed.starts_with("git+ssh://") {
        return Err("SSH URLs are not probed".to_string());
    }

    let without_prefix = trimmed.strip_prefix("git+").unwrap_or(trimmed);
    if !(without_prefix.starts_with("https://") || without_prefix.starts_with("http://")) {
        return Err(format!("unsupported URL scheme in {}", trimmed));
    }

    let without_slash = without_prefix.trim_end_matches('/');
    let normalized = without_slash.strip_suffix(".git").unwrap_or(without_slash);
    Ok(normalized.to_string())
}
