use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{CarouselError, Result};
use crate::item::Testimonial;

/// Reads a JSON array of testimonials.
pub fn load_testimonials(path: &Path) -> Result<Vec<Testimonial>> {
    let text = fs::read_to_string(path).map_err(|e| CarouselError::io(path, e))?;
    let testimonials: Vec<Testimonial> =
        serde_json::from_str(&text).map_err(|source| CarouselError::TestimonialParse {
            path: path.to_path_buf(),
            source,
        })?;
    for testimonial in &testimonials {
        testimonial.validate()?;
    }
    info!(count = testimonials.len(), path = ?path, "loaded testimonials");
    Ok(testimonials)
}

/// Reviews shown on the salon's home page.
pub fn salon_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial::new(
            "Sarah Johnson",
            "The gel extensions I got were absolutely perfect! They lasted for weeks and looked so natural. Definitely coming back!",
            5,
        ),
        Testimonial::new(
            "Emily Davis",
            "I love the 3D nail art designs. Everyone asks me where I got my nails done. The attention to detail is amazing!",
            5,
        ),
        Testimonial::new(
            "Jessica Williams",
            "Best nail extensions I've ever had. The staff is professional and the salon is so clean and beautiful.",
            4,
        ),
        Testimonial::new(
            "Michelle Thompson",
            "I'm absolutely in love with my new nail extensions! The technician was so patient and helped me choose the perfect design.",
            5,
        ),
        Testimonial::new(
            "Amanda Parker",
            "The polygel extensions are amazing - so lightweight yet durable. I've been getting compliments everywhere I go!",
            5,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn json_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_a_json_array() {
        let file = json_file(
            r#"[
                {"name": "Ana Ruiz", "quote": "Lovely!", "rating": 5},
                {"name": "Bo Chen", "quote": "Neat work", "rating": 3, "avatar": "bo.png"}
            ]"#,
        );
        let testimonials = load_testimonials(file.path()).unwrap();
        assert_eq!(testimonials.len(), 2);
        assert_eq!(testimonials[0].avatar, None);
        assert_eq!(testimonials[1].avatar.as_deref(), Some(Path::new("bo.png")));
    }

    #[test]
    fn rejects_bad_ratings() {
        let file = json_file(r#"[{"name": "Ana", "quote": "x", "rating": 9}]"#);
        assert!(matches!(
            load_testimonials(file.path()),
            Err(CarouselError::InvalidRating { rating: 9, .. })
        ));
    }

    #[test]
    fn reports_parse_and_io_errors() {
        let file = json_file("{ not json");
        assert!(matches!(
            load_testimonials(file.path()),
            Err(CarouselError::TestimonialParse { .. })
        ));
        assert!(matches!(
            load_testimonials(Path::new("/definitely/missing.json")),
            Err(CarouselError::Io { .. })
        ));
    }

    #[test]
    fn salon_set_is_valid() {
        let testimonials = salon_testimonials();
        assert_eq!(testimonials.len(), 5);
        assert!(testimonials.iter().all(|t| t.validate().is_ok()));
    }
}
