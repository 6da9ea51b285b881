mod cube_cylinder_contact;
mod cylinder_cylinder_collision;
mod epa_capacity;
mod random_disjoint;
mod resolution;
mod tilted_cylinder;
