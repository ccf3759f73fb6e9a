pub mod note;
pub mod ticket;
pub mod user;

/*
 A user owns tickets. Notes hang off a ticket and record who wrote them,
 customer notes carry is_staff = false and no staff_id.
 */
