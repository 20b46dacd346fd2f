use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct RestaurantDescription {
    pub id: String,
    pub name: String,
    pub cuisines: String,
    pub address: String,
    pub rating: Option<f32>,
    pub thumbnail: Option<String>,
}

impl RestaurantDescription {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            cuisines: String::new(),
            address: String::new(),
            rating: None,
            thumbnail: None,
        }
    }

    // Ratings are shown with a single decimal, or a dash when the place has none yet
    pub fn rating_label(&self) -> String {
        match self.rating {
            Some(rating) => format!("{:.1}", rating),
            None => "-".to_string(),
        }
    }
}

impl fmt::Display for RestaurantDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.rating_label())?;
        if !self.cuisines.is_empty() {
            write!(f, " · {}", self.cuisines)?;
        }
        if !self.address.is_empty() {
            write!(f, " · {}", self.address)?;
        }
        Ok(())
    }
}
