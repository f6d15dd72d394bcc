use chrono::{DateTime, SecondsFormat, Utc};

/// Site icon, served from `public/`.
pub const FAVICON_PATH: &str = "/favicon.svg";

/// When this binary was built, as stamped by `build.rs`.
pub fn build_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

pub fn robots_txt(site_url: &str) -> String {
    let site_url = site_url.trim_end_matches('/');
    format!("User-agent: *\nAllow: /\n\nHost: {site_url}\nSitemap: {site_url}/sitemap.xml\n")
}

/// Single-entry sitemap; the site is one page.
pub fn sitemap_xml(site_url: &str, last_modified: DateTime<Utc>) -> String {
    let lastmod = last_modified.to_rfc3339_opts(SecondsFormat::Secs, true);
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>{site_url}</loc>
    <lastmod>{lastmod}</lastmod>
    <changefreq>monthly</changefreq>
    <priority>1.0</priority>
  </url>
</urlset>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_robots_points_at_sitemap() {
        let robots = robots_txt("https://example.com/");
        assert!(robots.starts_with("User-agent: *\nAllow: /\n"));
        assert!(robots.contains("Host: https://example.com\n"));
        assert!(robots.contains("Sitemap: https://example.com/sitemap.xml\n"));
    }

    #[test]
    fn test_sitemap_entry() {
        let when = Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 0).unwrap();
        let xml = sitemap_xml("https://example.com", when);
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<loc>https://example.com</loc>"));
        assert!(xml.contains("<lastmod>2026-03-01T12:30:00Z</lastmod>"));
        assert!(xml.contains("<changefreq>monthly</changefreq>"));
        assert_eq!(xml.matches("<url>").count(), 1);
    }

    #[test]
    fn test_build_time_is_stamped() {
        assert!(DateTime::parse_from_rfc3339(env!("BUILD_TIME")).is_ok());
        assert!(build_time() <= Utc::now());
    }

    #[test]
    fn test_linked_assets_are_shipped() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for asset in [FAVICON_PATH, "/manifest.json"] {
            let file = public.join(asset.trim_start_matches('/'));
            assert!(file.is_file(), "{} is linked but missing", file.display());
        }
    }
}
