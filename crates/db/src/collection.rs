use std::fmt;

/// The four record collections the service reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Movies,
    Tickets,
    TheatreSeats,
    Users,
}

impl Collection {
    /// Backing table name. Only these fixed names are ever interpolated
    /// into SQL.
    pub fn table_name(self) -> &'static str {
        match self {
            Collection::Movies => "movies",
            Collection::Tickets => "tickets",
            Collection::TheatreSeats => "theatre_seats",
            Collection::Users => "users",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}
