//! Dashboard Renderer
//!
//! Builds the self-contained HTML page served at `/admin/wishes`:
//! a summary block (total count, render time) followed by one card per
//! wish in stored order. The page reloads itself on a fixed interval.
//!
//! Every wish-derived value is escaped before it is embedded in markup.

use chrono::{DateTime, Local};

use crate::config::DashboardConfig;
use crate::storage::Wish;

/// Presentation options for the dashboard page
#[derive(Debug, Clone)]
pub struct DashboardOptions {
    /// Page title and heading
    pub title: String,
    /// Seconds between automatic reloads
    pub refresh_secs: u64,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        DashboardConfig::default().into()
    }
}

impl From<DashboardConfig> for DashboardOptions {
    fn from(config: DashboardConfig) -> Self {
        Self {
            title: config.title,
            refresh_secs: config.refresh_secs,
        }
    }
}

const STYLE: &str = r#"
      body { font-family: Arial, sans-serif; margin: 20px; background: #f5f5f5; }
      .wish { background: white; padding: 15px; margin: 10px 0; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
      .timestamp { color: #666; font-size: 12px; }
      .text { font-size: 16px; margin: 8px 0; }
      .from { color: #888; font-size: 12px; }
      h1 { color: #333; }
      .stats { background: #e3f2fd; padding: 15px; border-radius: 8px; margin-bottom: 20px; }
"#;

/// Render the dashboard page for the given collection
pub fn render_dashboard(
    wishes: &[Wish],
    options: &DashboardOptions,
    rendered_at: DateTime<Local>,
) -> String {
    let title = escape_html(&options.title);
    let mut html = String::with_capacity(2048 + wishes.len() * 256);

    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>{STYLE}    </style>
  </head>
  <body>
    <h1>{title}</h1>
    <div class="stats">
      <h3>Statistics</h3>
      <p>Total Wishes: {count}</p>
      <p>Last Updated: {updated}</p>
    </div>
    <h2>All Wishes:</h2>
"#,
        count = wishes.len(),
        updated = rendered_at.format("%Y-%m-%d %H:%M:%S"),
    ));

    if wishes.is_empty() {
        html.push_str("    <p>No wishes yet!</p>\n");
    } else {
        for wish in wishes {
            html.push_str(&render_wish(wish));
        }
    }

    html.push_str(&format!(
        r#"    <script>
      setTimeout(() => location.reload(), {reload_ms});
    </script>
  </body>
</html>
"#,
        reload_ms = options.refresh_secs.saturating_mul(1000),
    ));

    html
}

fn render_wish(wish: &Wish) -> String {
    format!(
        r#"    <div class="wish">
      <div class="timestamp">{timestamp}</div>
      <div class="text">&quot;{text}&quot;</div>
      <div class="from">From: {from}</div>
    </div>
"#,
        timestamp = escape_html(&wish.timestamp),
        text = escape_html(&wish.text),
        from = escape_html(&wish.from),
    )
}

/// Escape text for safe inclusion in HTML element content and attribute values
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::WishId;

    fn wish(text: &str, timestamp: &str, from: &str) -> Wish {
        Wish::new(text, timestamp).id(WishId::from(1i64)).sent_by(from)
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_render_empty() {
        let html = render_dashboard(&[], &DashboardOptions::default(), Local::now());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Total Wishes: 0"));
        assert!(html.contains("No wishes yet!"));
        assert!(html.contains("setTimeout(() => location.reload(), 30000);"));
    }

    #[test]
    fn test_render_lists_wishes_in_order() {
        let wishes = vec![
            wish("first wish", "2024-01-01T00:00:00Z", "Unknown"),
            wish("second wish", "2024-01-02T00:00:00Z", "Pixel"),
            wish("third wish", "2024-01-03T00:00:00Z", "iPhone"),
        ];

        let html = render_dashboard(&wishes, &DashboardOptions::default(), Local::now());

        assert!(html.contains("Total Wishes: 3"));
        assert!(!html.contains("No wishes yet!"));

        let mut last = 0;
        for w in &wishes {
            assert_eq!(html.matches(w.text.as_str()).count(), 1);
            assert_eq!(html.matches(w.timestamp.as_str()).count(), 1);

            let pos = html.find(w.text.as_str()).unwrap();
            assert!(pos > last);
            last = pos;
        }
        assert!(html.contains("From: Pixel"));
    }

    #[test]
    fn test_render_escapes_wish_fields() {
        let wishes = vec![wish("<b>hi</b>", "<i>now</i>", "<img src=x>")];
        let html = render_dashboard(&wishes, &DashboardOptions::default(), Local::now());

        assert!(!html.contains("<b>hi</b>"));
        assert!(!html.contains("<i>now</i>"));
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;"));
    }

    #[test]
    fn test_render_uses_options() {
        let options = DashboardOptions {
            title: "Team Wishes".to_string(),
            refresh_secs: 5,
        };
        let html = render_dashboard(&[], &options, Local::now());

        assert!(html.contains("<title>Team Wishes</title>"));
        assert!(html.contains("location.reload(), 5000)"));
    }
}
