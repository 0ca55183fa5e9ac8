//! The fixed analyst prompt and its pure assembly helpers.

use crate::traits::{Comment, Post};

/// Instruction template sent to the model, with two placeholders for the
/// aggregated posts and comments. Kept byte-for-byte stable: tests and the
/// model both depend on the exact section wording.
pub const TEMPLATE: &str = r#"
You are an expert behavioral analyst AI.
Your job is to read the following **Reddit posts** and **Reddit comments** by a single user, and create a comprehensive **User Persona**.

---

**📝 Persona Structure**

1️⃣ **Name:** Create a creative nickname inspired by their username or style.

2️⃣ **Age Group:** Estimate an age bracket (e.g., 18–24, 25–34) using hints in their posts and comments.

3️⃣ **Occupation / Background:** Suggest what they might do for a living, their education, or general background clues.

4️⃣ **Personality Traits:** List 3–5 traits, each with a short reason (e.g., humorous, analytical, supportive, skeptical).

5️⃣ **Main Interests:** What topics do they care about? (Look at posts + comments.)

6️⃣ **Goals & Motivations:** What do they want or care about most?

7️⃣ **Pain Points & Frustrations:** Any complaints, struggles, or dislikes that repeat?

8️⃣ **Top Subreddits / Topics:** List the communities or topics they are most active in.

9️⃣ **Writing Style:** Describe their tone — formal, sarcastic, witty, supportive, short, long-winded, factual, ranting, etc.

🔟 **Sample Quotes:** Include 1 short post **and** 1 short comment that capture their tone.

1️⃣1️⃣ **Evidence:** For every trait or claim, include a matching snippet or short line that supports it.

---

**📌 Output Guidelines**

- Use clear markdown headings for each section.
- Be specific but do not make up information.
- Use exact snippets from posts/comments for evidence.
- Keep the final persona realistic, factual, and based only on the provided text.

---

**User Posts:**  
{USER_POSTS}

---

**User Comments:**  
{USER_COMMENTS}
"#;

/// Format one submission as its two-line text block.
pub fn post_block(post: &Post) -> String {
    format!("Title: {}\nBody: {}\n", post.title, post.body)
}

/// Format one comment as its one-line text block.
pub fn comment_block(comment: &Comment) -> String {
    format!("Comment: {}\n", comment.body)
}

/// Substitute the joined post and comment blocks into [`TEMPLATE`].
///
/// Pure string work: no length checks, no escaping. Empty inputs produce the
/// full instruction text with empty placeholder regions, which is passed to
/// the model as-is.
pub fn render_prompt(posts_text: &str, comments_text: &str) -> String {
    TEMPLATE
        .replace("{USER_POSTS}", posts_text)
        .replace("{USER_COMMENTS}", comments_text)
}

/// Join formatted blocks with single newlines, the only separator the
/// rendered prompt ever contains between blocks.
pub fn join_blocks(blocks: &[String]) -> String {
    blocks.join("\n")
}
