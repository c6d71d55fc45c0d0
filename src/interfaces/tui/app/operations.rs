//! Session record operations
//!
//! 提交、复制、访问、删除等动作都在这里实现。耗时的缩短调用
//! 派发到后台任务，完成事件经由通道回到主循环。

use tokio::sync::mpsc;
use tracing::debug;

use super::state::{App, Focus};
use crate::errors::Result;
use crate::interfaces::tui::constants::COPIED_MARKER_TTL;
use crate::interfaces::tui::events::TuiEvent;
use crate::services::SubmissionRequest;
use crate::session::ShortenedLink;
use crate::system::{browser, clipboard};

impl App {
    /// 提交当前表单
    ///
    /// 校验同步完成；通过后缩短调用进入后台任务，结果以
    /// `SubmissionFinished` 事件送回。缩短进行中再次提交被忽略。
    pub fn submit(&mut self, tx: &mpsc::UnboundedSender<TuiEvent>) {
        if !self.flow.trigger() {
            return;
        }

        let request = SubmissionRequest {
            url: self.form.url.clone(),
            alias: if self.form.alias_visible {
                self.form.alias.clone()
            } else {
                String::new()
            },
        };

        match self.service.prepare(&request, &self.session) {
            Ok(prepared) => {
                self.flow.submit_started();
                let service = self.service.clone();
                let tx = tx.clone();
                tokio::spawn(async move {
                    let result = service.shorten(prepared).await;
                    let _ = tx.send(TuiEvent::SubmissionFinished(result));
                });
            }
            Err(err) => {
                self.flow.validation_failed(err);
                self.flow.settle();
            }
        }
    }

    /// 处理后台缩短任务的结果
    ///
    /// 成功：新记录插入列表头部，表单清空并收起别名区域。
    /// 失败：输入原样保留，错误显示在表单下方。
    pub fn finish_submission(&mut self, result: Result<ShortenedLink>) {
        match result {
            Ok(link) => {
                self.flow.submit_succeeded();
                self.set_status(format!("Shortened: {}", link.short_url));
                self.session.prepend(link);
                self.form.clear();
                if self.focus == Focus::AliasField {
                    self.focus = Focus::UrlField;
                }
                self.selected_index = 0;
                self.scroll_offset = 0;
            }
            Err(err) => {
                self.flow.submit_failed(err);
            }
        }
        self.flow.settle();
    }

    /// 复制选中记录的短链接
    ///
    /// 成功后给该记录标记「已复制」，并安排一次携带令牌的
    /// 定时清除；期间若发生新的复制，旧定时器自动失效。
    pub fn copy_selected(&mut self, tx: &mpsc::UnboundedSender<TuiEvent>) {
        let Some(link) = self.get_selected_link() else {
            return;
        };
        let id = link.id;
        let short_url = link.short_url.clone();

        match clipboard::copy_to_clipboard(&short_url) {
            Ok(()) => {
                let token = self.copied.mark(id);
                self.set_status(format!("Copied: {}", short_url));
                let tx = tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(COPIED_MARKER_TTL).await;
                    let _ = tx.send(TuiEvent::CopiedExpired { token });
                });
            }
            Err(err) => {
                self.set_error(format!("Copy failed: {}", err));
            }
        }
    }

    /// 定时清除到期，仅当令牌仍是最新时生效
    pub fn expire_copied(&mut self, token: u64) {
        if self.copied.clear_if_current(token) {
            debug!("Copied marker expired");
        }
    }

    /// 在浏览器中打开选中记录的短链接
    ///
    /// 演示后端生成的短链接无法真实访问，此动作不提供。
    pub fn visit_selected(&mut self) {
        if self.service.is_demo() {
            return;
        }
        let Some(link) = self.get_selected_link() else {
            return;
        };
        let short_url = link.short_url.clone();

        match browser::open_in_browser(&short_url) {
            Ok(()) => self.set_status(format!("Opening {}", short_url)),
            Err(err) => self.set_error(format!("Open failed: {}", err)),
        }
    }

    /// 删除选中记录，无确认步骤
    pub fn delete_selected(&mut self) {
        let Some(link) = self.get_selected_link() else {
            return;
        };
        let id = link.id;

        if self.session.remove(id).is_some() {
            self.set_status("Link deleted".to_string());
        }
        self.clamp_selection();
    }

    /// 清空整个列表，仅在多于一条记录时可用
    pub fn clear_all(&mut self) {
        if !self.session.can_clear_all() {
            return;
        }
        let n = self.session.len();
        self.session.clear();
        self.clamp_selection();
        self.set_status(format!("Cleared {} links", n));
    }

    /// 展开/收起别名输入框
    ///
    /// 仅当后端支持别名时有效；收起时丢弃已输入的别名。
    pub fn toggle_alias_field(&mut self) {
        if !self.service.supports_alias() {
            return;
        }
        self.form.alias_visible = !self.form.alias_visible;
        if !self.form.alias_visible {
            self.form.alias.clear();
            if self.focus == Focus::AliasField {
                self.focus = Focus::UrlField;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::sync::mpsc;

    use super::*;
    use crate::config::ShortenerConfig;
    use crate::errors::LinksnipError;
    use crate::services::shortener::{LocalShortener, ShortenerProvider};
    use crate::services::{SubmissionService, SubmissionState};

    fn local_app() -> App {
        let config = ShortenerConfig {
            latency_min_ms: 0,
            latency_max_ms: 0,
            ..Default::default()
        };
        let provider = ShortenerProvider::with_backend(Arc::new(LocalShortener::new(&config)));
        App::new(SubmissionService::new(provider))
    }

    fn made_link(original: &str) -> ShortenedLink {
        ShortenedLink {
            id: uuid::Uuid::new_v4(),
            original_url: original.to_string(),
            short_url: "https://sho.rt/abc123".to_string(),
            short_code: None,
            created_at: chrono::Utc::now(),
            clicks: None,
        }
    }

    #[tokio::test]
    async fn test_submit_with_invalid_url_fails_validation() {
        let mut app = local_app();
        let (tx, mut rx) = mpsc::unbounded_channel();

        app.form.url = "not a url".to_string();
        app.submit(&tx);

        assert_eq!(app.flow.state(), SubmissionState::Idle);
        assert!(app.flow.error_message().is_some());
        // No background task was spawned
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_submit_spawns_task_and_result_lands_in_list() {
        let mut app = local_app();
        let (tx, mut rx) = mpsc::unbounded_channel();

        app.form.url = "example.com".to_string();
        app.submit(&tx);
        assert!(app.flow.is_submitting());

        let event = rx.recv().await.unwrap();
        let TuiEvent::SubmissionFinished(result) = event else {
            panic!("expected SubmissionFinished");
        };
        app.finish_submission(result);

        assert_eq!(app.session.len(), 1);
        assert_eq!(
            app.session.get(0).unwrap().original_url,
            "https://example.com"
        );
        assert!(app.form.url.is_empty());
        assert_eq!(app.flow.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_second_trigger_ignored_while_submitting() {
        let mut app = local_app();
        let (tx, mut rx) = mpsc::unbounded_channel();

        app.form.url = "example.com".to_string();
        app.submit(&tx);
        app.form.url = "other.example".to_string();
        app.submit(&tx);

        // Only the first submission produced a completion event
        assert!(rx.recv().await.is_some());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_finish_submission_success_resets_form_and_selection() {
        let mut app = local_app();
        app.form.url = "https://example.com".to_string();
        app.form.alias = "docs".to_string();
        app.form.alias_visible = true;
        app.focus = Focus::AliasField;
        app.selected_index = 2;

        app.finish_submission(Ok(made_link("https://example.com")));

        assert!(app.form.url.is_empty());
        assert!(!app.form.alias_visible);
        assert_eq!(app.focus, Focus::UrlField);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_finish_submission_failure_preserves_input() {
        let mut app = local_app();
        app.form.url = "https://example.com".to_string();

        app.finish_submission(Err(LinksnipError::all_providers_unavailable("down")));

        assert_eq!(app.form.url, "https://example.com");
        assert!(app.session.is_empty());
        assert!(app.flow.error_message().is_some());
        assert_eq!(app.flow.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_expire_copied_honors_token_generation() {
        let mut app = local_app();
        let link_a = made_link("https://a.example");
        let link_b = made_link("https://b.example");
        let (a, b) = (link_a.id, link_b.id);
        app.session.prepend(link_a);
        app.session.prepend(link_b);

        let stale = app.copied.mark(a);
        let fresh = app.copied.mark(b);

        app.expire_copied(stale);
        assert!(app.copied.is_marked(b));

        app.expire_copied(fresh);
        assert!(app.copied.marked_id().is_none());
    }

    #[test]
    fn test_delete_selected_removes_exactly_one() {
        let mut app = local_app();
        app.session.prepend(made_link("https://a.example"));
        app.session.prepend(made_link("https://b.example"));
        app.selected_index = 0;

        app.delete_selected();

        assert_eq!(app.session.len(), 1);
        assert_eq!(
            app.session.get(0).unwrap().original_url,
            "https://a.example"
        );
    }

    #[test]
    fn test_clear_all_requires_more_than_one_record() {
        let mut app = local_app();
        app.session.prepend(made_link("https://a.example"));

        app.clear_all();
        assert_eq!(app.session.len(), 1);

        app.session.prepend(made_link("https://b.example"));
        app.clear_all();
        assert!(app.session.is_empty());
    }

    #[test]
    fn test_toggle_alias_field_off_discards_alias() {
        let mut app = local_app();

        app.toggle_alias_field();
        assert!(app.form.alias_visible);

        app.form.alias = "docs".to_string();
        app.focus = Focus::AliasField;
        app.toggle_alias_field();

        assert!(!app.form.alias_visible);
        assert!(app.form.alias.is_empty());
        assert_eq!(app.focus, Focus::UrlField);
    }
}
