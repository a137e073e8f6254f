use crate::render_opts::RenderOpts;
use raylet_engine::core::types::{Number, Point3, Vector3};
use raylet_engine::shared::ray::Ray;

/// A pinhole camera sitting at `centre`, looking down `-Z`, with the image plane one unit in front of it
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    centre: Point3,
    uv_origin: Point3,
    pixel_delta_u: Vector3,
    pixel_delta_v: Vector3,
}

impl Viewport {
    pub fn new(centre: Point3, render_opts: RenderOpts) -> Self {
        let [img_width, img_height] = render_opts.dims().map(|d| d as Number);

        // Determine viewport dimensions.
        let focal_length = 1.0;
        let viewport_height = 2.0;
        let viewport_width = viewport_height * render_opts.aspect_ratio();

        // Calculate the vectors across the horizontal and down the vertical viewport edges.
        let viewport_u = Vector3::new(viewport_width, 0., 0.);
        let viewport_v = Vector3::new(0., -viewport_height, 0.);

        // Calculate the horizontal and vertical delta vectors from pixel to pixel.
        let pixel_delta_u = viewport_u / img_width;
        let pixel_delta_v = viewport_v / img_height;

        // Calculate the location of the upper left pixel.
        let viewport_upper_left = centre - Vector3::new(0., 0., focal_length) - viewport_u / 2. - viewport_v / 2.;
        let uv_origin = viewport_upper_left + (pixel_delta_u + pixel_delta_v) * 0.5;

        Self {
            centre,
            uv_origin,
            pixel_delta_u,
            pixel_delta_v,
        }
    }

    /// Calculates the view ray for a given pixel at the coords `(px, py)`
    /// (screen-space, top-left to bot-right)
    pub fn calc_ray(&self, px: Number, py: Number) -> Ray {
        let pixel_center = self.uv_origin + (self.pixel_delta_u * px) + (self.pixel_delta_v * py);
        let ray_direction = pixel_center - self.centre;
        Ray::new(self.centre, ray_direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nonzero::nonzero;

    #[test]
    fn corner_rays_aim_at_pixel_centres() {
        let opts = RenderOpts {
            width: nonzero!(2_usize),
            height: nonzero!(2_usize),
        };
        let viewport = Viewport::new(Point3::ZERO, opts);

        // 2x2 viewport one unit in front, so each pixel is 1x1 and its centre is half a unit in from the corner
        let top_left = viewport.calc_ray(0., 0.);
        assert_eq!(*top_left.origin(), Point3::ZERO);
        assert_eq!(*top_left.direction(), Vector3::new(-0.5, 0.5, -1.));

        let bot_right = viewport.calc_ray(1., 1.);
        assert_eq!(*bot_right.origin(), Point3::ZERO);
        assert_eq!(*bot_right.direction(), Vector3::new(0.5, -0.5, -1.));
    }

    #[test]
    fn rays_start_at_camera_centre() {
        let centre = Point3::new(1., 2., 3.);
        let viewport = Viewport::new(centre, RenderOpts::default());
        let ray = viewport.calc_ray(17., 200.);
        assert_eq!(*ray.origin(), centre);
        assert_eq!(ray.at(1.).z(), 2.);
    }
}
