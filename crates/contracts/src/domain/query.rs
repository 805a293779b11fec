use url::form_urlencoded;

/// Query parameters the pages understand
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    /// `type`
    pub donation_type: Option<String>,
    pub category: Option<String>,
    pub c: Option<String>,
    pub amount: Option<String>,
    pub anonymous: Option<String>,
}

impl PageQuery {
    /// Parse `location.search`. The first value of a repeated key wins and
    /// unknown keys are skipped.
    pub fn parse(search: &str) -> Self {
        let query = search.strip_prefix('?').unwrap_or(search);
        let mut parsed = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "type" => &mut parsed.donation_type,
                "category" => &mut parsed.category,
                "c" => &mut parsed.c,
                "amount" => &mut parsed.amount,
                "anonymous" => &mut parsed.anonymous,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        parsed
    }

    /// Category requested on the give and success pages
    pub fn donation_type(&self) -> Option<&str> {
        non_empty(&self.donation_type)
    }

    /// Category requested on the info page: `c` wins over `category`
    pub fn info_category(&self) -> Option<&str> {
        non_empty(&self.c).or_else(|| non_empty(&self.category))
    }

    pub fn amount(&self) -> Option<&str> {
        non_empty(&self.amount)
    }

    pub fn anonymous(&self) -> Option<&str> {
        non_empty(&self.anonymous)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
