//! ChatGPT deeplink assembly

/// Base URL that accepts a pre-filled prompt via the `q` query parameter
pub const CHATGPT_BASE_URL: &str = "https://chat.openai.com/";

/// Build a ChatGPT deeplink embedding the generated document.
///
/// `repo_url` is the URL exactly as the user supplied it, so the prompt
/// refers to the repository the way they typed it. The whole prompt is
/// percent-encoded; no length cap is applied here, the structure and
/// README caps upstream keep the document small.
pub fn chatgpt_deeplink(document: &str, repo_url: &str) -> String {
    let prompt = format!(
        r#"I have a GitHub repository and I'd like you to help me understand it and potentially recreate it.

Repository URL: {repo_url}

Here's the documentation I've generated:

{document}

Can you:
1. Analyze the project structure and tech stack
2. Explain what this repository does
3. Provide suggestions for improvements or similar projects
4. Help me understand how to set it up locally

Please provide detailed insights and actionable recommendations."#
    );

    format!("{}?q={}", CHATGPT_BASE_URL, urlencoding::encode(&prompt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deeplink_base() {
        let link = chatgpt_deeplink("# Doc", "https://github.com/octo/demo");
        assert!(link.starts_with("https://chat.openai.com/?q="));
    }

    #[test]
    fn test_deeplink_is_fully_encoded() {
        let link = chatgpt_deeplink("# Doc\n\nwith spaces", "https://github.com/octo/demo");
        let query = link.split_once("?q=").map(|(_, q)| q).unwrap();

        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
        assert!(!query.contains('#'));
    }

    #[test]
    fn test_deeplink_round_trips() {
        let document = "# demo\n\nSome *markdown* with `code` & symbols: 100%";
        let repo_url = "https://github.com/octo/demo";
        let link = chatgpt_deeplink(document, repo_url);

        let query = link.split_once("?q=").map(|(_, q)| q).unwrap();
        let decoded = urlencoding::decode(query).unwrap();

        assert!(decoded.starts_with(
            "I have a GitHub repository and I'd like you to help me understand it and potentially recreate it."
        ));
        assert!(decoded.contains("Repository URL: https://github.com/octo/demo\n"));
        assert!(decoded.contains("Here's the documentation I've generated:\n\n# demo\n"));
        assert!(decoded.contains(document));
        assert!(decoded.contains("1. Analyze the project structure and tech stack"));
        assert!(decoded.contains("4. Help me understand how to set it up locally"));
        assert!(decoded.ends_with("Please provide detailed insights and actionable recommendations."));
    }

    #[test]
    fn test_deeplink_embeds_raw_input_url() {
        // Shorthand input is embedded as typed, not normalized
        let link = chatgpt_deeplink("doc", "octo/demo");
        let query = link.split_once("?q=").map(|(_, q)| q).unwrap();
        let decoded = urlencoding::decode(query).unwrap();

        assert!(decoded.contains("Repository URL: octo/demo\n"));
    }
}
