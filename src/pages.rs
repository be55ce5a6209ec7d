//! HTML pages
//!
//! Renders the derived view models into full documents. Every interpolated
//! value goes through [`escape`]; the markup itself is static.

use crate::view::{ProfileView, RepoLine};

const STYLESHEET: &str = "
body { margin: 0; font-family: system-ui, sans-serif; background: #f3f4f6; color: #111827; }
header { background: #1f2937; padding: 1rem 1.5rem 5rem; }
header form { max-width: 48rem; margin: 0 auto; display: flex; gap: 0.5rem; justify-content: flex-end; }
header input { background: #374151; color: #d1d5db; border: 0; border-radius: 0.375rem; padding: 0.375rem 0.75rem; }
main { max-width: 48rem; margin: -4rem auto 2rem; padding: 0 1rem; }
.card { background: #fff; border-radius: 0.5rem; box-shadow: 0 1px 3px rgb(0 0 0 / 0.1); margin-bottom: 1.5rem; overflow: hidden; }
.card > h3 { margin: 0; padding: 1.5rem; font-size: 1rem; }
.masthead { display: flex; gap: 1.25rem; align-items: center; padding: 1.5rem; }
.masthead img { width: 5rem; height: 5rem; border-radius: 9999px; }
.masthead .handle { margin: 0; font-size: 0.875rem; color: #4b5563; }
.masthead .name { margin: 0; font-size: 1.5rem; font-weight: 700; }
.masthead .joined { margin: 0; font-size: 0.875rem; color: #4b5563; }
.stats { display: grid; grid-template-columns: repeat(3, 1fr); margin: 0; border-top: 1px solid #e5e7eb; background: #f9fafb; text-align: center; }
.stats div { padding: 1.25rem 1.5rem; font-size: 0.875rem; }
.stats dt { display: inline; color: #4b5563; }
.stats dd { display: inline; margin: 0 0.25rem 0 0; color: #111827; }
.details { margin: 0; border-top: 1px solid #f3f4f6; }
.details div { display: grid; grid-template-columns: 1fr 2fr; gap: 1rem; padding: 1.5rem; border-top: 1px solid #f3f4f6; font-size: 0.875rem; }
.details dd { margin: 0; color: #374151; }
.na { color: #9ca3af; }
.repos { list-style: none; margin: 0; padding: 0; border-top: 1px solid #f3f4f6; }
.repos li { padding: 1.25rem 1.5rem; border-top: 1px solid #f3f4f6; }
.repos .meta { font-size: 0.75rem; color: #6b7280; }
.chip { display: inline-block; border: 1px solid #e5e7eb; border-radius: 0.375rem; padding: 0.125rem 0.375rem; font-size: 0.75rem; }
.dot { display: inline-block; width: 0.375rem; height: 0.375rem; border-radius: 9999px; background: var(--color, #9ca3af); }
.topic { display: inline-block; background: #f0f9ff; color: #0369a1; border-radius: 0.375rem; padding: 0.125rem 0.375rem; font-size: 0.75rem; }
.empty { padding: 3rem 1.5rem; text-align: center; }
.empty .title { font-weight: 600; margin: 0; }
.empty .desc { color: #6b7280; font-size: 0.875rem; }
.error { padding: 1.5rem; text-align: center; }
.error h3 { margin: 0 0 0.5rem; }
.error p { color: #6b7280; font-size: 0.875rem; margin: 0; }
";

/// Render the profile page for a looked-up user
pub fn profile_page(view: &ProfileView) -> String {
    let mut body = String::new();

    body.push_str(&masthead(view));
    body.push_str(&profile_details(view));
    body.push_str(&repositories_panel(view));

    layout(&view.display_name, Some(&view.login), &body)
}

/// Render the generic error page
pub fn error_page(message: &str, query: Option<&str>) -> String {
    let body = format!(
        "<div class=\"card error\">\
         <h3>Oops! An error occurred&#8230;</h3>\
         <p>{}</p>\
         </div>",
        escape(message)
    );

    layout("Error", query, &body)
}

fn layout(title: &str, query: Option<&str>, body: &str) -> String {
    format!(
        "<!doctype html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <style>{STYLESHEET}</style>\n\
         </head>\n\
         <body>\n\
         <header>\n\
         <form action=\"/\" method=\"get\" role=\"search\">\n\
         <input type=\"search\" name=\"q\" value=\"{query}\" placeholder=\"Search\" aria-label=\"Search users\">\n\
         </form>\n\
         </header>\n\
         <main>\n{body}\n</main>\n\
         </body>\n\
         </html>\n",
        title = escape(title),
        query = escape(query.unwrap_or_default()),
    )
}

fn masthead(view: &ProfileView) -> String {
    let handle = match &view.pronouns {
        Some(pronouns) => format!("{} &middot; {}", escape(&view.login), escape(pronouns)),
        None => escape(&view.login),
    };

    format!(
        "<div class=\"card\">\
         <div class=\"masthead\">\
         <img src=\"{avatar}\" alt=\"\">\
         <div>\
         <p class=\"handle\">{handle}</p>\
         <p class=\"name\">{name}</p>\
         <p class=\"joined\">Joined on {joined}</p>\
         </div>\
         <a href=\"{url}\">View profile</a>\
         </div>\
         <dl class=\"stats\">\
         <div><dd>{repos}</dd><dt>Repositories</dt></div>\
         <div><dd>{followers}</dd><dt>Followers</dt></div>\
         <div><dd>{following}</dd><dt>Following</dt></div>\
         </dl>\
         </div>",
        avatar = escape(&view.avatar_url),
        name = escape(&view.display_name),
        joined = escape(&view.joined_on),
        url = escape(&view.profile_url),
        repos = escape(&view.repositories_stat),
        followers = escape(&view.followers_stat),
        following = escape(&view.following_stat),
    )
}

fn profile_details(view: &ProfileView) -> String {
    let email = view
        .email
        .as_deref()
        .filter(|email| !email.is_empty())
        .map(|email| format!("<a href=\"mailto:{0}\">{0}</a>", escape(email)));
    let website = view
        .website_url
        .as_deref()
        .map(|url| format!("<a href=\"{0}\">{0}</a>", escape(url)));
    let twitter = view.twitter_username.as_deref().map(|handle| {
        format!(
            "<a href=\"https://twitter.com/{0}\">@{0}</a>",
            escape(handle)
        )
    });

    format!(
        "<div class=\"card\">\
         <h3>Profile</h3>\
         <dl class=\"details\">\
         {email}{location}{company}{website}{twitter}{bio}\
         </dl>\
         </div>",
        email = detail_row("Email", email),
        location = detail_row("Location", view.location.as_deref().map(escape)),
        company = detail_row("Company", view.company.as_deref().map(escape)),
        website = detail_row("Website", website),
        twitter = detail_row("Twitter", twitter),
        bio = detail_row("Bio", view.bio.as_deref().map(escape)),
    )
}

/// One row of the profile detail list; absent values render as N/A
fn detail_row(label: &str, value: Option<String>) -> String {
    let value = value.unwrap_or_else(|| "<span class=\"na\">N/A</span>".to_string());

    format!("<div><dt>{label}</dt><dd>{value}</dd></div>")
}

fn repositories_panel(view: &ProfileView) -> String {
    let content = if view.repositories.is_empty() {
        format!(
            "<div class=\"empty\">\
             <p class=\"title\">No repositories found</p>\
             <p class=\"desc\">{} doesn't have any public repositories yet.</p>\
             </div>",
            escape(&view.login)
        )
    } else {
        let entries: String = view.repositories.iter().map(repo_entry).collect();
        format!("<ul class=\"repos\">{entries}</ul>")
    };

    format!(
        "<div class=\"card\">\
         <h3>Top Repositories <a href=\"{url}?tab=repositories\">View all</a></h3>\
         {content}\
         </div>",
        url = escape(&view.profile_url),
    )
}

fn repo_entry(repo: &RepoLine) -> String {
    let language = repo
        .language
        .as_ref()
        .map(|language| {
            let dot = language
                .color
                .as_deref()
                .map(|color| format!("<span class=\"dot\" style=\"--color: {}\"></span> ", escape(color)))
                .unwrap_or_default();

            format!("<span class=\"chip\">{}{}</span>", dot, escape(&language.name))
        })
        .unwrap_or_default();

    let description = repo
        .description
        .as_deref()
        .map(|description| format!("<p>{}</p>", escape(description)))
        .unwrap_or_default();

    let topics = if repo.topics.is_empty() {
        String::new()
    } else {
        let chips: String = repo
            .topics
            .iter()
            .map(|topic| format!("<span class=\"topic\">{}</span> ", escape(topic)))
            .collect();

        format!("<p>{}</p>", chips.trim_end())
    };

    let license = repo
        .license
        .as_deref()
        .map(|license| format!(" &middot; {}", escape(license)))
        .unwrap_or_default();

    format!(
        "<li>\
         <p><a href=\"{url}\">{name}</a> {language}</p>\
         {description}\
         {topics}\
         <p class=\"meta\">{stars} &middot; {forks}{license} &middot; Updated on {updated}</p>\
         </li>",
        url = escape(&repo.url),
        name = escape(&repo.name),
        stars = escape(&repo.stars_label),
        forks = escape(&repo.forks_label),
        updated = escape(&repo.updated_on),
    )
}

/// Escape a value for interpolation into HTML text or attribute position
fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_view() -> ProfileView {
        ProfileView {
            login: "someone".to_string(),
            display_name: "Some One".to_string(),
            pronouns: Some("they/them".to_string()),
            avatar_url: "https://example.com/avatar.png".to_string(),
            profile_url: "https://github.com/someone".to_string(),
            joined_on: "March 2, 2011".to_string(),
            repositories_stat: "589".to_string(),
            followers_stat: "33,549".to_string(),
            following_stat: "151".to_string(),
            email: None,
            location: Some("Berlin".to_string()),
            company: None,
            website_url: None,
            twitter_username: None,
            bio: None,
            repositories: vec![sample_repo_line()],
        }
    }

    fn sample_repo_line() -> RepoLine {
        RepoLine {
            name: "sample".to_string(),
            url: "https://github.com/someone/sample".to_string(),
            description: Some("A sample repository".to_string()),
            language: None,
            topics: vec![],
            stars_label: "2 stars".to_string(),
            forks_label: "1 fork".to_string(),
            license: None,
            updated_on: "Jan 5, 2026".to_string(),
        }
    }

    #[test]
    fn escape_covers_html_metacharacters() {
        assert_eq!(
            escape(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn profile_page_interpolates_escaped_values() {
        let mut view = sample_view();
        view.bio = Some("<b>bold</b> claims".to_string());

        let html = profile_page(&view);

        assert!(html.contains("Some One"));
        assert!(html.contains("Joined on March 2, 2011"));
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt; claims"));
        assert!(!html.contains("<b>bold</b>"));
    }

    #[test]
    fn search_input_carries_current_query() {
        let html = profile_page(&sample_view());

        assert!(html.contains("name=\"q\" value=\"someone\""));
    }

    #[test]
    fn absent_details_render_as_na() {
        let html = profile_page(&sample_view());

        assert!(html.contains("N/A"));
        assert!(html.contains("Berlin"));
    }

    #[test]
    fn repository_without_license_has_no_license_segment() {
        let html = profile_page(&sample_view());

        assert!(html.contains("2 stars &middot; 1 fork &middot; Updated on Jan 5, 2026"));
    }

    #[test]
    fn repository_with_license_names_it() {
        let mut view = sample_view();
        view.repositories[0].license = Some("MIT License".to_string());

        let html = profile_page(&view);

        assert!(html.contains("2 stars &middot; 1 fork &middot; MIT License &middot; Updated on Jan 5, 2026"));
    }

    #[test]
    fn empty_topics_render_no_topic_chips() {
        let html = profile_page(&sample_view());

        assert!(!html.contains("class=\"topic\""));
    }

    #[test]
    fn no_repositories_renders_placeholder_instead_of_list() {
        let mut view = sample_view();
        view.repositories.clear();

        let html = profile_page(&view);

        assert!(html.contains("No repositories found"));
        assert!(html.contains("someone doesn't have any public repositories yet."));
        assert!(!html.contains("<li>"));
    }

    #[test]
    fn error_page_shows_heading_and_message() {
        let html = error_page("API rate limit exceeded", Some("someone"));

        assert!(html.contains("Oops! An error occurred&#8230;"));
        assert!(html.contains("API rate limit exceeded"));
        assert!(html.contains("value=\"someone\""));
    }
}
