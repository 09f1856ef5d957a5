use crate::model::Customer;

/// Customers whose company name or contact email contains `query`, ignoring
/// case. A blank query returns every customer.
pub fn search_customers<'a>(customers: &'a [Customer], query: &str) -> Vec<&'a Customer> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return customers.iter().collect();
    }
    let contains = |field: &Option<String>| {
        field
            .as_deref()
            .is_some_and(|v| v.to_lowercase().contains(&needle))
    };
    customers
        .iter()
        .filter(|c| contains(&c.company_name) || contains(&c.contact_email))
        .collect()
}
