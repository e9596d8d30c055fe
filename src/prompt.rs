/// Build the instruction text for a single generation request.
///
/// The key names and item counts below are load-bearing: the extractor
/// validates against them and the frontend renders them.
pub fn build_prompt(product_name: &str, category: &str) -> String {
    format!(
        "Generate highly detailed product specifications for: {product_name} in the {category} category.\n\
         Return ONLY a raw JSON object with these keys:\n\
         {{\n\
           \"title\": \"A catchy professional title\",\n\
           \"longDescription\": \"A detailed 60-word paragraph\",\n\
           \"features\": [\"Feature 1\", \"Feature 2\", \"Feature 3\", \"Feature 4\"],\n\
           \"priceRange\": \"Detailed price range in Indian Rupees (₹)\",\n\
           \"tags\": [\"Tag1\", \"Tag2\", \"Tag3\"]\n\
         }}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embeds_both_inputs() {
        let prompt = build_prompt("Wireless Mouse", "Electronics");
        assert!(prompt.contains("Wireless Mouse"));
        assert!(prompt.contains("Electronics"));
    }

    #[test]
    fn pins_the_contractual_keys() {
        let prompt = build_prompt("Desk Lamp", "Home & Kitchen");
        for key in ["\"title\"", "\"longDescription\"", "\"features\"", "\"priceRange\"", "\"tags\""] {
            assert!(prompt.contains(key), "prompt is missing {key}");
        }
        assert!(prompt.contains("ONLY a raw JSON object"));
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(
            build_prompt("Yoga Mat", "Sports & Fitness"),
            build_prompt("Yoga Mat", "Sports & Fitness"),
        );
    }
}
