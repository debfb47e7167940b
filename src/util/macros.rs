/// Defines a skill that emits one strain per difficulty object and buckets
/// them into fixed-length sections.
///
/// The skill type must provide the inherent items
/// - `const SECTION_LENGTH: f64`
/// - `fn calculate_initial_strain(&self, time: f64, curr: &Object, objects: &[Object]) -> f64`
/// - `fn strain_value_at(&mut self, curr: &Object, objects: &[Object]) -> f64`
/// - `fn difficulty_value(&self) -> f64`
///
/// Fields without default value become arguments of the generated `new`
/// function.
macro_rules! define_skill {
    // Entry point
    (
        $( #[$meta:meta] )*
        $vis:vis struct $skill:ident: $( <$lt:lifetime> )? [$object:ty] {
            $( $field_name:ident: $field_type:ty $( = $field_default:expr )?, )*
        }
    ) => {
        define_skill! {
            @[ $( $lt )? ] [$object]
            fields { $( $field_name $field_type $( = $field_default )?, )* }
            struct { $( #[$meta] )* $vis $skill }
            new {
                args {}
                assigns {}
            }
        }
    };

    // Parse field without default
    (
        @[ $( $lt:lifetime )? ] [$object:ty]
        fields {
            $field_name:ident $field_type:ty, // <-
            $( $fields:tt )*
        }
        struct { $( $struct:tt )* }
        new {
            args { $( $args:tt )* }
            assigns { $( $assigns:tt )* }
        }
    ) => {
        define_skill! {
            @[ $( $lt )? ] [$object]
            fields { $( $fields )* }
            struct { $( $struct )* $field_name $field_type, } // <-
            new {
                args { $( $args )* $field_name $field_type, } // <-
                assigns { $( $assigns )* $field_name, }       // <-
            }
        }
    };

    // Parse field with default
    (
        @[ $( $lt:lifetime )? ] [$object:ty]
        fields {
            $field_name:ident $field_type:ty = $field_default:expr, // <-
            $( $fields:tt )*
        }
        struct { $( $struct:tt )* }
        new {
            args { $( $args:tt )* }
            assigns { $( $assigns:tt )* }
        }
    ) => {
        define_skill! {
            @[ $( $lt )? ] [$object]
            fields { $( $fields )* }
            struct { $( $struct )* $field_name $field_type, } // <-
            new {
                args { $( $args )* }
                assigns { $( $assigns )* $field_name $field_default, } // <-
            }
        }
    };

    // Final output
    (
        @[ $( $lt:lifetime )? ] [$object:ty]
        fields {}
        struct {
            $( #[$meta:meta] )*
            $vis:vis $name:ident
            $( $field_name:ident $field_type:ty, )*
        }
        new {
            args { $( $arg_name:ident $arg_type:ty, )* }
            assigns { $( $assign_name:ident $( $assign_expr:expr )?, )* }
        }
    ) => {
        $( #[$meta] )*
        $vis struct $name {
            $( $field_name: $field_type, )*
            sections: crate::any::difficulty::skills::StrainSections,
        }

        impl $name {
            $vis fn new(
                $( $arg_name: $arg_type, )*
            ) -> Self {
                Self {
                    $( $assign_name $( : $assign_expr )?, )*
                    sections: crate::any::difficulty::skills::StrainSections::new(
                        Self::SECTION_LENGTH,
                    ),
                }
            }
        }

        impl $( <$lt> )? crate::any::difficulty::skills::Skill<$object> for $name {
            fn process(&mut self, curr: &$object, objects: &[$object]) {
                use crate::any::difficulty::object::HasStartTime;

                let time = curr.start_time();

                while let Some(section_end) = self.sections.pending_section_end(time) {
                    let initial_strain = self.calculate_initial_strain(section_end, curr, objects);
                    self.sections.start_new_section(initial_strain);
                }

                let strain = self.strain_value_at(curr, objects);
                self.sections.record(strain);
            }

            fn strain_peaks(&self) -> Vec<crate::any::difficulty::skills::StrainPeak> {
                self.sections.peaks()
            }

            fn object_strains(&self) -> &[f64] {
                self.sections.object_strains()
            }

            fn difficulty_value(&self) -> f64 {
                $name::difficulty_value(self)
            }
        }
    };
}
