//! Audit logging to dedicated Slack channels.
//!
//! Both channels are optional. When one isn't configured, writing to it does
//! nothing and succeeds.

use super::{
    block::Block,
    channel::{ChannelId, UserId},
    dispatch::Dispatcher,
    error::SlackError,
    message::Msg,
    transport::Transport,
};
use std::{backtrace::Backtrace, fmt};
use tracing::{debug, error};

impl<T: Transport> Dispatcher<T> {
    /// Post a preformatted message to the log channel.
    pub async fn send_to_log_channel(&self, msg: &Msg) -> Result<(), SlackError> {
        let Some(channel) = configured(&self.config.log_channel) else {
            debug!("No log channel configured");
            return Ok(());
        };

        self.post(msg, channel).await.map(|_| ())
    }

    /// Post a summary of `err` to the error channel, then a backtrace of the
    /// caller as a reply in its thread. Either failure is returned.
    pub async fn send_to_err_channel<E>(&self, context: &str, err: &E) -> Result<(), SlackError>
    where
        E: fmt::Display + ?Sized,
    {
        let Some(channel) = configured(&self.config.err_channel) else {
            debug!("No error channel configured");
            return Ok(());
        };

        let summary = Msg::blocks(vec![Block::Mrkdwn(fmt_err_summary(context, err))]);
        let trace = Msg::text(fmt_trace(&Backtrace::force_capture()));

        let parent = self.post(&summary, channel).await?;
        self.post_thread(&trace, channel, &parent.ts).await?;

        Ok(())
    }

    /// Note that `user` hit `endpoint`, subject to
    /// [crate::RequestLoggingConfig].
    ///
    /// This never fails. If logging goes wrong it's reported to the error
    /// channel, and if that goes wrong too it's only traced.
    pub async fn log_request(&self, endpoint: &str, user: &UserId) {
        let cfg = self.config.request_logging;

        if configured(&self.config.log_channel).is_none()
            || !cfg.enabled
            || self.skip_admin_log(user)
        {
            return;
        }

        let shown_user = (!cfg.mask_user_id).then_some(user);
        let body = fmt_request_log(endpoint, shown_user, chrono::Utc::now().timestamp());
        let msg = Msg::blocks(vec![Block::Mrkdwn(body), Block::Divider]);

        if let Err(e) = self.send_to_log_channel(&msg).await {
            if let Err(e) = self.send_to_err_channel("failed to log request", &e).await {
                error!(error = %e, "Failed to report request logging failure");
            }
        }
    }

    // With no admin configured nobody is excluded, not even an empty user.
    fn skip_admin_log(&self, user: &UserId) -> bool {
        self.config.request_logging.exclude_admin && self.config.admin_id.as_ref() == Some(user)
    }
}

/// An empty channel ID counts as unset.
fn configured(channel: &Option<ChannelId>) -> Option<&ChannelId> {
    channel.as_ref().filter(|c| !c.0.is_empty())
}

/// The request log line. `user` is `None` when masked.
pub fn fmt_request_log(endpoint: &str, user: Option<&UserId>, unix_ts: i64) -> String {
    match user {
        Some(user) => format!(
            "*endpoint:* `{}`\n*user:* <@{}>\n*timestamp:* `{}`",
            endpoint, user, unix_ts
        ),
        None => format!("*endpoint:* `{}`\n*timestamp:* `{}`", endpoint, unix_ts),
    }
}

fn fmt_err_summary<E: fmt::Display + ?Sized>(context: &str, err: &E) -> String {
    if context.is_empty() {
        format!("`{}`", err)
    } else {
        format!("*{}*: `{}`", context, err)
    }
}

fn fmt_trace(trace: &Backtrace) -> String {
    format!("```\n{}\n```", trace)
}
