//! Plain-text user listing written to a byte sink (stdout in the CLI).

use crate::model::user::User;
use std::io::{self, Write};

/// First line of every report.
pub const REPORT_HEADER: &str = "Users in the database:";

/// Writes the header and then one `(id, 'name', 'email')` line per user,
/// preserving slice order.
pub fn render_report<W: Write + ?Sized>(users: &[User], out: &mut W) -> io::Result<()> {
    writeln!(out, "{REPORT_HEADER}")?;
    for user in users {
        writeln!(out, "{user}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::{render_report, REPORT_HEADER};
    use crate::model::user::User;

    fn render_report_string(users: &[User]) -> String {
        let mut buffer = Vec::new();
        render_report(users, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn user(id: i64, name: &str, email: &str) -> User {
        User {
            id,
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn renders_header_and_rows_in_order() {
        let users = vec![
            user(1, "John Doe", "a@x.com"),
            user(2, "Jane Roe", "b@y.com"),
        ];

        assert_eq!(
            render_report_string(&users),
            "Users in the database:\n(1, 'John Doe', 'a@x.com')\n(2, 'Jane Roe', 'b@y.com')\n"
        );
    }

    #[test]
    fn empty_store_renders_header_only() {
        assert_eq!(render_report_string(&[]), format!("{REPORT_HEADER}\n"));
    }
}
