use poem::handler;
use poem::web::{Data, Html};

pub const INPUT_LABEL: &str = "AIに聞きたいことを入力してね";
pub const SUBMIT_LABEL: &str = "送信";
pub const EMPTY_INPUT_WARNING: &str = "何か文字を入力してください";
pub const REQUEST_FAILED_MESSAGE: &str = "AIからの応答を取得できませんでした";

/// The single page with the text box, rendered once at startup.
#[derive(Debug, Clone)]
pub struct IndexPage {
    html: String,
}

impl IndexPage {
    pub fn new(title: &str) -> Self {
        Self {
            html: render(title),
        }
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

#[handler]
pub fn index(Data(page): Data<&IndexPage>) -> Html<String> {
    Html(page.html().to_string())
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render(title: &str) -> String {
    let title = escape_html(title);
    // Output is written with textContent so model text is never parsed as HTML.
    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
  body {{ font-family: sans-serif; max-width: 46rem; margin: 3rem auto; padding: 0 1rem; color: #1e293b; }}
  label {{ display: block; margin-bottom: .5rem; }}
  input[type=text] {{ width: 100%; box-sizing: border-box; padding: .5rem; font-size: 1rem; }}
  button {{ margin-top: .75rem; padding: .4rem 1.2rem; font-size: 1rem; }}
  #output {{ white-space: pre-wrap; margin-top: 1.5rem; }}
  .warning {{ background: #fef9c3; border-left: 4px solid #eab308; padding: .75rem; }}
  .error {{ background: #fee2e2; border-left: 4px solid #dc2626; padding: .75rem; }}
</style>
</head>
<body>
<h1>{title}</h1>
<form id="ask">
  <label for="input">{label}</label>
  <input type="text" id="input" name="input" autocomplete="off">
  <button type="submit" id="submit">{submit}</button>
</form>
<div id="output"></div>
<script>
const form = document.getElementById("ask");
const button = document.getElementById("submit");
const output = document.getElementById("output");

function show(text, kind) {{
  output.className = kind || "";
  output.textContent = text;
}}

form.addEventListener("submit", async (event) => {{
  event.preventDefault();
  button.disabled = true;
  show("");
  try {{
    const response = await fetch("/api/completions", {{
      method: "POST",
      headers: {{ "content-type": "application/json" }},
      body: JSON.stringify({{ input: document.getElementById("input").value }}),
    }});
    const data = await response.json();
    if (response.ok) {{
      show(data.text);
    }} else if (data.message === "completion.empty_input") {{
      show("{warning}", "warning");
    }} else {{
      show("{failed} (" + data.message + ")", "error");
    }}
  }} catch (err) {{
    show("{failed} (" + err + ")", "error");
  }} finally {{
    button.disabled = false;
  }}
}});
</script>
</body>
</html>
"#,
        title = title,
        label = INPUT_LABEL,
        submit = SUBMIT_LABEL,
        warning = EMPTY_INPUT_WARNING,
        failed = REQUEST_FAILED_MESSAGE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem::test::TestClient;
    use poem::{EndpointExt, Route, get};

    #[test]
    fn should_escape_title() {
        let page = IndexPage::new("<b>Tom & Jerry</b>");

        assert!(page.html().contains("<h1>&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;</h1>"));
        assert!(!page.html().contains("<b>Tom"));
    }

    #[test]
    fn should_render_input_submit_and_warning() {
        let page = IndexPage::new("私のAIアプリ");

        assert!(page.html().contains("<title>私のAIアプリ</title>"));
        assert!(page.html().contains(INPUT_LABEL));
        assert!(page.html().contains(SUBMIT_LABEL));
        assert!(page.html().contains(EMPTY_INPUT_WARNING));
        assert!(page.html().contains("/api/completions"));
    }

    #[tokio::test]
    async fn should_serve_page_at_root() {
        let app = Route::new()
            .at("/", get(index))
            .data(IndexPage::new("Ask"));
        let cli = TestClient::new(app);

        let resp = cli.get("/").send().await;

        resp.assert_status_is_ok();
        resp.assert_content_type("text/html; charset=utf-8");
    }
}
