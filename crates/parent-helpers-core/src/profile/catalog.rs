//! Built-in parenting sources offered before the free-text option.

/// Parenting books.
pub const BOOKS: [&str; 6] = [
    "Parenting with Presence",
    "Parenting Without Power Struggles",
    "Peaceful Parent, Happy Kids",
    "Permission to Parent",
    "Positive Parenting: An Essential Guide",
    "Punished by Rewards",
];

/// Parenting experts.
pub const EXPERTS: [&str; 5] = [
    "Dr. Laura Markham",
    "Dr. Daniel Siegel",
    "Dr. Ross Greene",
    "Janet Lansbury",
    "Adele Faber",
];

/// Parenting styles.
pub const STYLES: [&str; 6] = [
    "Positive Parenting",
    "Authoritative",
    "Permissive",
    "Attachment Parenting",
    "Montessori",
    "Gentle Parenting",
];
