//! MySQL DDL for the booking application schema.
//!
//! Tables are listed in creation order: `bookings` references `users` and
//! `packages`, so both must exist before it.

/// One fixed table of the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDef {
    /// Table name as stored by the engine.
    pub name: &'static str,
    /// Human-readable label used in status lines.
    pub label: &'static str,
    /// Column names in declaration order.
    pub columns: &'static [&'static str],
    pub ddl: &'static str,
}

pub const USERS: TableDef = TableDef {
    name: "users",
    label: "Users",
    columns: &["id", "name", "email", "password", "created_at"],
    ddl: r#"
CREATE TABLE IF NOT EXISTS users (
    id INT AUTO_INCREMENT PRIMARY KEY,
    name VARCHAR(100) NOT NULL,
    email VARCHAR(100) NOT NULL UNIQUE,
    password VARCHAR(255) NOT NULL, -- hash, never plaintext
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)"#,
};

pub const PACKAGES: TableDef = TableDef {
    name: "packages",
    label: "Packages",
    columns: &["id", "name", "description", "price", "created_at"],
    ddl: r#"
CREATE TABLE IF NOT EXISTS packages (
    id INT AUTO_INCREMENT PRIMARY KEY,
    name VARCHAR(100) NOT NULL,
    description TEXT,
    price DECIMAL(10,2),
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)"#,
};

/// Deleting a user removes its bookings; deleting a package keeps the
/// booking and nulls `package_id`.
pub const BOOKINGS: TableDef = TableDef {
    name: "bookings",
    label: "Bookings",
    columns: &[
        "id",
        "user_id",
        "package_id",
        "booking_date",
        "status",
        "created_at",
    ],
    ddl: r#"
CREATE TABLE IF NOT EXISTS bookings (
    id INT AUTO_INCREMENT PRIMARY KEY,
    user_id INT,
    package_id INT,
    booking_date DATE,
    status VARCHAR(50) DEFAULT 'pending',
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE,
    FOREIGN KEY (package_id) REFERENCES packages(id) ON DELETE SET NULL
)"#,
};

pub const CONTACT_MESSAGES: TableDef = TableDef {
    name: "contact_messages",
    label: "Contact Messages",
    columns: &["id", "name", "email", "message", "created_at"],
    ddl: r#"
CREATE TABLE IF NOT EXISTS contact_messages (
    id INT AUTO_INCREMENT PRIMARY KEY,
    name VARCHAR(100),
    email VARCHAR(100),
    message TEXT,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)"#,
};

pub const ADMIN_USERS: TableDef = TableDef {
    name: "admin_users",
    label: "Admin Users",
    columns: &["id", "username", "password", "created_at"],
    ddl: r#"
CREATE TABLE IF NOT EXISTS admin_users (
    id INT AUTO_INCREMENT PRIMARY KEY,
    username VARCHAR(100) NOT NULL UNIQUE,
    password VARCHAR(255) NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)"#,
};

/// All tables in creation order.
pub const TABLES: [TableDef; 5] = [USERS, PACKAGES, BOOKINGS, CONTACT_MESSAGES, ADMIN_USERS];

/// `name` must already be validated as a plain identifier.
pub fn create_database_sql(name: &str) -> String {
    format!("CREATE DATABASE IF NOT EXISTS `{name}`")
}

pub fn use_database_sql(name: &str) -> String {
    format!("USE `{name}`")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bookings_created_after_referenced_tables() {
        let pos = |name: &str| TABLES.iter().position(|t| t.name == name).unwrap();
        assert!(pos("users") < pos("bookings"));
        assert!(pos("packages") < pos("bookings"));
    }

    #[test]
    fn every_statement_is_idempotent_and_names_its_table() {
        for table in TABLES {
            let expected = format!("CREATE TABLE IF NOT EXISTS {} (", table.name);
            assert!(table.ddl.trim_start().starts_with(&expected), "{}", table.name);
        }
    }

    #[test]
    fn declared_columns_appear_in_ddl() {
        for table in TABLES {
            for column in table.columns {
                assert!(
                    table.ddl.contains(&format!("\n    {column} ")),
                    "{}.{column} missing from DDL",
                    table.name
                );
            }
        }
    }

    #[test]
    fn database_statements_quote_the_name() {
        assert_eq!(
            create_database_sql("kb_labs"),
            "CREATE DATABASE IF NOT EXISTS `kb_labs`"
        );
        assert_eq!(use_database_sql("kb_labs"), "USE `kb_labs`");
    }
}
