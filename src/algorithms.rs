pub mod straight_skeleton;
