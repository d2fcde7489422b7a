//! Generation request construction.
//!
//! Turns user input into the instruction text and output-shape declaration
//! for the text-generation service. The same rules apply across platforms:
//! a non-empty competitor list switches to the competitive-analysis variant
//! (which additionally asks for a strategic insight per keyword), an
//! attachment switches to the analyze-the-visual-first variant, input that
//! might be a URL is never fetched but treated as the literal topic, and
//! the output language is always stated explicitly.

mod shapes;

use crate::ports::{Attachment, GenerationRequest, GeoPoint};

/// How the SEO input text should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeoInputMode {
    /// A short business description, brand name, or URL.
    #[default]
    Description,
    /// The full text content of a webpage.
    Content,
}

/// Common inputs for the website-SEO builders.
#[derive(Debug, Clone, Copy)]
pub struct SeoInput<'a> {
    pub text: &'a str,
    pub mode: SeoInputMode,
    pub language: &'a str,
    pub competitors: Option<&'a str>,
}

/// Common inputs for the social builders.
#[derive(Debug, Clone)]
pub struct SocialInput<'a> {
    pub text: &'a str,
    pub language: &'a str,
    pub attachment: Option<Attachment>,
}

/// Appended to every request: the service must never fetch a URL-shaped
/// input, only treat the literal string as the topic.
const URL_RULE: &str = "IMPORTANT RULE: if the input appears to be a URL, do not access \
the link. Treat the URL string itself as the topic.";

fn language_clause(language: &str) -> String {
    format!("The final output must be in {language}.")
}

/// A competitor list only counts when it is non-empty after trimming.
fn competitors(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|c| !c.is_empty())
}

const KEYWORD_METADATA_FIELDS: &str = "For each keyword provide: the keyword itself, an estimated \
search volume (High, Medium, or Low), a trending rank from 1 (breakout growth in recent search \
interest) to 10, the user intent (Informational, Navigational, Commercial, or Transactional), \
the estimated competition to rank organically (High, Medium, or Low), and an estimated \
cost-per-click range such as \"$0.50 - $2.00\".";

const STRATEGIC_INSIGHT_FIELD: &str = "Additionally provide a strategic insight for each keyword: \
a brief one- or two-sentence analysis of its value in the competitive landscape, such as an \
opportunity gap none of the competitors target or a foundational keyword a top competitor \
already ranks for.";

/// Website SEO keyword research.
pub fn seo_keywords(input: SeoInput<'_>) -> GenerationRequest {
    let prompt = match competitors(input.competitors) {
        Some(rivals) => format!(
            "You are a senior SEO strategist specializing in competitive analysis. Analyze my \
             business or content, compare it against my competitors, and generate a strategic \
             list of 20-30 SEO keywords with a diverse mix of head, body, and long-tail terms. \
             Stay strictly focused on the core topic of the input; do not drift into adjacent \
             niches the description does not mention.\n\n\
             My content/business:\n\"{text}\"\n\n\
             My competitors:\n\"{rivals}\"\n\n\
             {metadata}\n\n{insight}\n\n\
             All keywords must be real, actionable, and timely; reflect the current year where \
             relevant and never produce sample or placeholder keywords. Identify keyword gaps, \
             overlaps, and opportunities where my content has an edge.\n\n\
             {url_rule}\n\n{language}",
            text = input.text,
            rivals = rivals,
            metadata = KEYWORD_METADATA_FIELDS,
            insight = STRATEGIC_INSIGHT_FIELD,
            url_rule = URL_RULE,
            language = language_clause(input.language),
        ),
        None => {
            let subject = match input.mode {
                SeoInputMode::Description => format!(
                    "the following business description, brand name, or URL: \"{}\"",
                    input.text
                ),
                SeoInputMode::Content => format!(
                    "the following website content:\n\n---\n\n\"{}\"\n\n---",
                    input.text
                ),
            };
            format!(
                "You are a senior SEO analyst with deep keyword-research expertise for specific \
                 business niches. Analyze {subject} and generate a comprehensive list of 20-30 \
                 highly relevant, real-world SEO keywords with a diverse mix of head, body, and \
                 long-tail terms. Keep the analysis strictly relevant to the provided input.\n\n\
                 {metadata}\n\n\
                 All keywords must be real, actionable, and timely; reflect the current year \
                 where relevant and never produce sample or placeholder keywords.\n\n\
                 {url_rule}\n\n{language}",
                subject = subject,
                metadata = KEYWORD_METADATA_FIELDS,
                url_rule = URL_RULE,
                language = language_clause(input.language),
            )
        }
    };

    GenerationRequest::new(prompt).with_shape(shapes::seo_keywords())
}

/// Meta description suggestions.
pub fn meta_descriptions(input: SeoInput<'_>) -> GenerationRequest {
    let prompt = match competitors(input.competitors) {
        Some(rivals) => format!(
            "You are an expert SEO copywriter who writes high-converting meta descriptions that \
             stand out from the competition. Analyze my content and my competitors' likely \
             positioning, then write 3 unique meta descriptions. Each must be a single sentence, \
             strictly under 160 characters, highlight a unique selling proposition that \
             differentiates my content from theirs, and include a subtle call-to-action.\n\n\
             My content: \"{text}\"\n\
             Competitors: \"{rivals}\"\n\n\
             {url_rule}\n\n{language}",
            text = input.text,
            rivals = rivals,
            url_rule = URL_RULE,
            language = language_clause(input.language),
        ),
        None => {
            let intro = match input.mode {
                SeoInputMode::Description => {
                    "For the following business or content description, generate 3 unique and \
                     compelling meta descriptions."
                }
                SeoInputMode::Content => {
                    "Based on the following website content, generate 3 unique and compelling \
                     meta descriptions that accurately summarize the page."
                }
            };
            format!(
                "You are an expert SEO copywriter. {intro} Each description must be a single \
                 sentence, strictly under 160 characters, and should include a subtle \
                 call-to-action such as \"Learn more\" or \"Shop today\".\n\n\
                 Content: \"{text}\"\n\n\
                 {url_rule}\n\n{language}",
                intro = intro,
                text = input.text,
                url_rule = URL_RULE,
                language = language_clause(input.language),
            )
        }
    };

    GenerationRequest::new(prompt).with_shape(shapes::meta_descriptions())
}

/// Structured-data (JSON-LD) markup.
pub fn schema_markup(input: SeoInput<'_>) -> GenerationRequest {
    let prompt = match competitors(input.competitors) {
        Some(rivals) => format!(
            "You are a technical SEO specialist focused on accurate, strategically superior \
             structured data. Analyze my business description and my competitors'. Identify the \
             most powerful schema.org type for a competitive edge (prefer specific types over \
             generic ones, e.g. 'MedicalBusiness' over 'LocalBusiness') and generate complete, \
             valid JSON-LD markup, more detailed than what my competitors are likely using. \
             Populate it from the content and use placeholders only when necessary.\n\n\
             My content: \"{text}\"\n\
             Competitors: \"{rivals}\"\n\n\
             Respond with the schema type and the JSON-LD as a string. The text within the \
             JSON-LD must be in {lang}.\n\n{url_rule}",
            text = input.text,
            rivals = rivals,
            lang = input.language,
            url_rule = URL_RULE,
        ),
        None => {
            let intro = match input.mode {
                SeoInputMode::Description => {
                    "For the following business or content description, generate the most \
                     appropriate and detailed JSON-LD schema markup."
                }
                SeoInputMode::Content => {
                    "Based on the full text content of the webpage provided below, generate the \
                     most appropriate and detailed JSON-LD schema markup."
                }
            };
            format!(
                "You are a technical SEO specialist. {intro}\n\n\
                 First identify the best schema.org type (LocalBusiness, Organization, Article, \
                 Product, and so on), then generate the complete JSON-LD markup populated with \
                 everything you can infer from the content, using placeholders like \
                 \"[Your Name]\" for anything you cannot.\n\n\
                 Content: \"{text}\"\n\n\
                 Respond with the schema type and the JSON-LD as a string. The text within the \
                 JSON-LD must be in {lang}.\n\n{url_rule}",
                intro = intro,
                text = input.text,
                lang = input.language,
                url_rule = URL_RULE,
            )
        }
    };

    GenerationRequest::new(prompt).with_shape(shapes::schema_markup())
}

/// SERP-analysis content brief for a target keyword.
pub fn content_brief(
    target_keyword: &str,
    language: &str,
    competitors_raw: Option<&str>,
) -> GenerationRequest {
    let mut prompt = format!(
        "You are a senior SEO strategist performing an advanced analysis of the search results \
         for a target keyword, producing a comprehensive content brief.\n\n\
         Target keyword: \"{target_keyword}\"\n\n\
         Analysis steps:\n\
         1. Determine the searcher's primary intent (Informational, Commercial, Navigational, \
         or Transactional).\n\
         2. Analyze the likely top 10 results: dominant content formats, recurring themes, and \
         depth of coverage.\n\
         3. Extract the key entities, concepts, and sub-topics top-ranking pages consistently \
         cover.\n\
         4. Synthesize the most relevant questions users ask around this keyword.\n\n\
         Then produce the brief: the search intent, a compelling SEO-optimized title under 60 \
         characters, an engaging meta description under 160 characters, a 2-3 sentence summary \
         of the current top-ranking content, the key topics to cover, the questions the content \
         must answer, a logical outline with H2 and H3 headings, an estimated word count needed \
         to be competitive, and brief internal/external linking advice.\n"
    );

    if let Some(rivals) = competitors(competitors_raw) {
        prompt.push_str(&format!(
            "\nMy competitors: \"{rivals}\"\n\
             Tailor the SERP analysis and linking suggestions to identify gaps and \
             opportunities relative to these competitors.\n"
        ));
    }

    prompt.push_str(&format!("\n{}\n\n{}", URL_RULE, language_clause(language)));

    GenerationRequest::new(prompt).with_shape(shapes::content_brief())
}

/// Location-grounded local-search keywords.
///
/// This is the one variant without a shape declaration: the response is
/// requested as JSON inside a markdown block and parsed from free-form
/// text, because grounding and response schemas are mutually exclusive on
/// the service.
pub fn local_keywords(
    text: &str,
    language: &str,
    location: GeoPoint,
    competitors_raw: Option<&str>,
) -> GenerationRequest {
    let mut prompt = format!(
        "You are a local SEO expert specializing in map-pack and business-profile optimization. \
         Generate a strategic list of 20-30 local search keywords for this business, grounded \
         in real-world location data.\n\n\
         My business: \"{text}\"\n"
    );

    if let Some(rivals) = competitors(competitors_raw) {
        prompt.push_str(&format!("My competitors: \"{rivals}\"\n"));
    }

    prompt.push_str(
        "\nInclude \"near me\" queries, keywords with geo-modifiers (city, neighborhood, zip \
         code), service-in-location keywords (e.g. \"plumber in Brooklyn\"), and \
         product-in-location keywords.\n\n\
         For each keyword provide its keyword, searchVolume, trendingRank, userIntent, \
         competition, cpc, and a strategicInsight tailored for local search.\n\n\
         Format the response as a single JSON object inside a markdown code block, with a \
         \"keywords\" key holding the array of keyword objects.\n\n",
    );
    prompt.push_str(URL_RULE);
    prompt.push_str("\n\n");
    prompt.push_str(&format!(
        "Ensure the final text inside the JSON is in {language}."
    ));

    GenerationRequest::new(prompt).with_location(location)
}

/// YouTube tags, description, titles, and categories.
pub fn youtube(input: SocialInput<'_>, category: Option<&str>) -> GenerationRequest {
    let mut prompt = if input.attachment.is_some() {
        "You are a YouTube growth expert. Generate SEO-optimized content from the provided \
         video description and the attached visual media.\n\n\
         Analyze the attachment first and in depth: the key subjects, the setting and \
         environment, the actions and events taking place, the mood and style, and any visible \
         text or branding. Your tags, keywords, description, and titles must be primarily \
         derived from that visual analysis; use the text description only as secondary \
         context.\n\n"
            .to_string()
    } else {
        "You are a YouTube growth expert. Generate SEO-optimized content from the provided \
         video description.\n\n"
            .to_string()
    };

    prompt.push_str(&format!("Video description: \"{}\"\n\n", input.text));
    prompt.push_str(
        "Provide:\n\
         1. 15-20 trending tags, each with an estimated search volume (High, Medium, or Low) \
         and a trending rank from 1 (most trending) to 10.\n\
         2. Description keywords with the same metadata.\n\
         3. A compelling, SEO-optimized video description as a single-element string array.\n\
         4. 3 engaging title suggestions.\n\
         5. Relevant category suggestions.\n\n",
    );

    if let Some(category) = category.map(str::trim).filter(|c| !c.is_empty()) {
        prompt.push_str(&format!(
            "The video is intended for the \"{category}\" category; tailor the suggestions \
             accordingly.\n\n"
        ));
    }

    prompt.push_str(
        "All suggestions must be genuine, ready to use, and highly relevant, with any \
         date-sensitive items reflecting the current year.\n\n",
    );
    prompt.push_str(URL_RULE);
    prompt.push_str("\n\n");
    prompt.push_str(&language_clause(input.language));

    let request = GenerationRequest::new(prompt).with_shape(shapes::youtube());
    attach(request, input.attachment)
}

/// LinkedIn hashtag suggestions.
pub fn linkedin(input: SocialInput<'_>) -> GenerationRequest {
    let mut prompt = if input.attachment.is_some() {
        "You are a LinkedIn marketing expert. Generate relevant, trending hashtags from the \
         provided post content and the attached image.\n\n\
         Drive the suggestions primarily by a deep analysis of the image: the professional \
         context (office setting, industry, charts, presentations), the people and their \
         apparent roles, the objects and technology in frame, and the overall theme such as \
         collaboration or leadership. Use the post text only to refine and add context to the \
         image-based suggestions.\n\n"
            .to_string()
    } else {
        "You are a LinkedIn marketing expert. Generate relevant, trending hashtags from the \
         provided post content.\n\n"
            .to_string()
    };

    prompt.push_str(&format!("Post content: \"{}\"\n\n", input.text));
    prompt.push_str(
        "For each hashtag provide an estimated search volume (High, Medium, or Low) and a \
         trending rank from 1 (most trending) to 10. The hashtags must be real, widely used or \
         emerging, and focused on current professional trends; never placeholder examples.\n\n",
    );
    prompt.push_str(URL_RULE);
    prompt.push_str("\n\n");
    prompt.push_str(&language_clause(input.language));

    let request = GenerationRequest::new(prompt).with_shape(shapes::hashtags());
    attach(request, input.attachment)
}

/// Instagram caption and hashtags.
pub fn instagram(input: SocialInput<'_>) -> GenerationRequest {
    let mut prompt = if input.attachment.is_some() {
        "You are an Instagram marketing specialist. Generate an engaging caption and relevant \
         hashtags from the provided post description and the attached visual media.\n\n\
         Root the caption and hashtags in a deep, nuanced analysis of the visual content, going \
         beyond simple object identification: the aesthetic and vibe, the color palette, the \
         composition and photography style, the emotion and mood, and the niche or community \
         depicted. Use the post description only to complement the visual-driven suggestions.\n\n"
            .to_string()
    } else {
        "You are an Instagram marketing specialist. Generate an engaging caption and relevant \
         hashtags from the provided post description.\n\n"
            .to_string()
    };

    prompt.push_str(&format!("Post description: \"{}\"\n\n", input.text));
    prompt.push_str(
        "Provide:\n\
         1. An engaging, authentic, ready-to-post caption as a single-element string array; \
         avoid generic or sample content.\n\
         2. A list of hashtags mixing popular and niche ones, each with an estimated search \
         volume (High, Medium, or Low) and a trending rank from 1 (most trending) to 10, \
         reflecting current trends.\n\n",
    );
    prompt.push_str(URL_RULE);
    prompt.push_str("\n\n");
    prompt.push_str(&language_clause(input.language));

    let request = GenerationRequest::new(prompt).with_shape(shapes::instagram());
    attach(request, input.attachment)
}

/// Facebook post text, hashtags, and calls to action.
pub fn facebook(input: SocialInput<'_>) -> GenerationRequest {
    let mut prompt = if input.attachment.is_some() {
        "You are a Facebook marketing expert. Generate an engaging post, relevant hashtags, and \
         clear calls to action from the provided post description and the attached visual \
         media.\n\n\
         Drive all suggestions by a thorough analysis of the visual content: the central \
         subject and the story it tells, the audience it would appeal to, any actionable \
         elements such as a product, event, or service, and the emotional tone. Use the post \
         description only for supplemental details.\n\n"
            .to_string()
    } else {
        "You are a Facebook marketing expert. Generate an engaging post, relevant hashtags, and \
         clear calls to action from the provided post description.\n\n"
            .to_string()
    };

    prompt.push_str(&format!("Post description: \"{}\"\n\n", input.text));
    prompt.push_str(
        "Provide:\n\
         1. An engaging post text as a single-element string array, designed to foster \
         community interaction; practical, never sample content.\n\
         2. 3-7 timely, relevant hashtags, each with an estimated search volume (High, Medium, \
         or Low) and a trending rank from 1 (most trending) to 10.\n\
         3. Three distinct, practical call-to-action suggestions.\n\n",
    );
    prompt.push_str(URL_RULE);
    prompt.push_str("\n\n");
    prompt.push_str(&language_clause(input.language));

    let request = GenerationRequest::new(prompt).with_shape(shapes::facebook());
    attach(request, input.attachment)
}

fn attach(request: GenerationRequest, attachment: Option<Attachment>) -> GenerationRequest {
    match attachment {
        Some(attachment) => request.with_attachment(attachment),
        None => request,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seo_input<'a>(competitors: Option<&'a str>) -> SeoInput<'a> {
        SeoInput {
            text: "A local coffee shop in Brooklyn",
            mode: SeoInputMode::Description,
            language: "English",
            competitors,
        }
    }

    #[test]
    fn every_builder_appends_the_language_clause() {
        let request = seo_keywords(seo_input(None));
        assert!(request.prompt.contains("The final output must be in English."));

        let request = youtube(
            SocialInput {
                text: "roastery tour",
                language: "Spanish",
                attachment: None,
            },
            None,
        );
        assert!(request.prompt.contains("The final output must be in Spanish."));
    }

    #[test]
    fn every_builder_forbids_fetching_urls() {
        let request = meta_descriptions(seo_input(None));
        assert!(request.prompt.contains("do not access the link"));
    }

    #[test]
    fn competitor_variant_requests_strategic_insight() {
        let plain = seo_keywords(seo_input(None));
        assert!(!plain.prompt.contains("strategic insight"));

        let competitive = seo_keywords(seo_input(Some("rival-cafe.com")));
        assert!(competitive.prompt.contains("strategic insight"));
        assert!(competitive.prompt.contains("rival-cafe.com"));
    }

    #[test]
    fn blank_competitor_list_uses_the_plain_variant() {
        let request = seo_keywords(seo_input(Some("   ")));
        assert!(!request.prompt.contains("strategic insight"));
    }

    #[test]
    fn attachment_switches_to_the_visual_first_variant() {
        let with_file = instagram(SocialInput {
            text: "latte art",
            language: "English",
            attachment: Some(Attachment {
                mime_type: "image/png".to_string(),
                data: vec![1, 2, 3],
            }),
        });
        assert!(with_file.prompt.contains("visual"));
        assert!(with_file.attachment.is_some());

        let text_only = instagram(SocialInput {
            text: "latte art",
            language: "English",
            attachment: None,
        });
        assert!(text_only.attachment.is_none());
    }

    #[test]
    fn platform_shapes_are_attached_except_for_the_grounded_variant() {
        assert!(seo_keywords(seo_input(None)).shape.is_some());
        assert!(content_brief("best espresso", "English", None).shape.is_some());

        let grounded = local_keywords(
            "Joe's Pizza",
            "English",
            GeoPoint {
                latitude: 40.6782,
                longitude: -73.9442,
            },
            None,
        );
        assert!(grounded.shape.is_none());
        assert!(grounded.location.is_some());
        assert!(grounded.prompt.contains("markdown code block"));
    }

    #[test]
    fn youtube_category_hint_is_optional() {
        let input = SocialInput {
            text: "roastery tour",
            language: "English",
            attachment: None,
        };
        let without = youtube(input.clone(), None);
        assert!(!without.prompt.contains("intended for"));

        let with = youtube(input, Some("Howto & Style"));
        assert!(with.prompt.contains("\"Howto & Style\" category"));
    }

    #[test]
    fn content_mode_reframes_the_seo_subject() {
        let request = seo_keywords(SeoInput {
            text: "Full page text here",
            mode: SeoInputMode::Content,
            language: "English",
            competitors: None,
        });
        assert!(request.prompt.contains("website content"));
    }
}
