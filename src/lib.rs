// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
//! Quadrature rules on reference domains (line, square, cube, triangle) and a generic
//! integrator for finite element style computations.
pub mod Utils;
pub mod quadrature;
